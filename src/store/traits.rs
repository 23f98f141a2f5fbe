//! Trait abstraction for project persistence

use crate::document::Document;
use crate::error::Result;
use std::path::PathBuf;

/// Loads and saves whole project documents.
///
/// There is no partial persistence: a save rewrites the entire document.
pub trait ProjectStore {
    /// Where the project lives (for messages).
    fn location(&self, project: &str) -> PathBuf;

    /// Load a project. Missing, unreadable or malformed projects load as an
    /// empty document.
    fn load(&self, project: &str) -> Document;

    /// Persist a project, returning the location written.
    fn save(&self, project: &str, document: &Document) -> Result<PathBuf>;
}
