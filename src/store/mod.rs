//! Project storage and directory bootstrap
//!
//! Projects are YAML files named `<project>.yaml` inside a `.recall`
//! directory. A `.recall` directory in the working directory takes priority
//! over the global one in the user's home.

pub mod bootstrap;
pub mod file_store;
pub mod traits;

pub use bootstrap::{init_global, init_local, DirStatus, GlobalInit};
pub use file_store::{load_document, save_document, FileStore};
pub use traits::ProjectStore;

#[cfg(test)]
pub(crate) mod mock;

use crate::error::{RecallError, Result};
use std::path::PathBuf;

/// Name of the store directory, both local and under the home directory.
pub const STORE_DIR: &str = ".recall";

/// File extension of project documents.
pub const PROJECT_EXTENSION: &str = "yaml";

/// Settings file name inside the global store directory.
pub const SETTINGS_FILE: &str = "settings.yaml";

/// `~/.recall`
pub fn global_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(RecallError::NoHomeDir)?;
    Ok(home.join(STORE_DIR))
}
