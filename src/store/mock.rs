//! In-memory ProjectStore for tests that don't need the filesystem.

use super::traits::ProjectStore;
use crate::document::Document;
use crate::error::Result;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Default)]
pub struct MemoryStore {
    projects: RefCell<HashMap<String, Document>>,
    saves: Cell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a project.
    pub fn with_project(self, project: &str, document: Document) -> Self {
        self.projects
            .borrow_mut()
            .insert(project.to_string(), document);
        self
    }

    pub fn get(&self, project: &str) -> Option<Document> {
        self.projects.borrow().get(project).cloned()
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl ProjectStore for MemoryStore {
    fn location(&self, project: &str) -> PathBuf {
        PathBuf::from(format!("memory://{}", project))
    }

    fn load(&self, project: &str) -> Document {
        self.get(project).unwrap_or_default()
    }

    fn save(&self, project: &str, document: &Document) -> Result<PathBuf> {
        self.projects
            .borrow_mut()
            .insert(project.to_string(), document.clone());
        self.saves.set(self.saves.get() + 1);
        Ok(self.location(project))
    }
}
