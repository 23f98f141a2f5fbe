//! YAML file store

use super::traits::ProjectStore;
use super::{global_dir, PROJECT_EXTENSION, STORE_DIR};
use crate::document::Document;
use crate::error::{RecallError, Result};
use std::path::{Path, PathBuf};

/// Stores each project as `<base>/<project>.yaml`.
#[derive(Debug, Clone)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    /// Store rooted at an explicit directory.
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// Pick the store for the current working directory.
    pub fn discover() -> Result<Self> {
        Self::discover_in(Path::new("."))
    }

    /// Use `<cwd>/.recall` when it exists, otherwise `~/.recall`.
    pub fn discover_in(cwd: &Path) -> Result<Self> {
        let local = cwd.join(STORE_DIR);
        if local.is_dir() {
            tracing::debug!("Using local store at {}", local.display());
            return Ok(Self::new(local));
        }

        let global = global_dir()?;
        tracing::debug!("Using global store at {}", global.display());
        Ok(Self::new(global))
    }

    pub fn base(&self) -> &Path {
        &self.base
    }
}

impl ProjectStore for FileStore {
    fn location(&self, project: &str) -> PathBuf {
        self.base.join(format!("{}.{}", project, PROJECT_EXTENSION))
    }

    fn load(&self, project: &str) -> Document {
        load_document(&self.location(project))
    }

    fn save(&self, project: &str, document: &Document) -> Result<PathBuf> {
        let path = self.location(project);
        save_document(&path, document)?;
        Ok(path)
    }
}

/// Read a project file. Any failure yields an empty document.
pub fn load_document(path: &Path) -> Document {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No project file at {}", path.display());
            return Document::new();
        }
        Err(e) => {
            tracing::warn!("Could not read {}: {}", path.display(), e);
            return Document::new();
        }
    };

    match Document::from_yaml_str(&contents) {
        Ok(document) => {
            tracing::debug!(
                keys = document.len(),
                "Loaded project from {}",
                path.display()
            );
            document
        }
        Err(e) => {
            tracing::warn!("Could not parse {}: {}. Treating it as empty.", path.display(), e);
            Document::new()
        }
    }
}

/// Write a project file, creating its directory if needed.
pub fn save_document(path: &Path, document: &Document) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| RecallError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let yaml = document.to_yaml_string()?;
    std::fs::write(path, yaml).map_err(|source| RecallError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!("Saved project to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{get_key_data, set_key_data, KeyData};
    use tempfile::TempDir;

    #[test]
    fn test_location() {
        let store = FileStore::new("/tmp/base");
        assert_eq!(
            store.location("myApp"),
            PathBuf::from("/tmp/base/myApp.yaml")
        );
    }

    #[test]
    fn test_discover_prefers_local_dir() {
        let tmp = TempDir::new().unwrap();
        std::fs::create_dir(tmp.path().join(STORE_DIR)).unwrap();

        let store = FileStore::discover_in(tmp.path()).unwrap();
        assert_eq!(store.base(), tmp.path().join(STORE_DIR));
    }

    #[test]
    fn test_discover_falls_back_to_global() {
        let tmp = TempDir::new().unwrap();
        if let Ok(global) = global_dir() {
            let store = FileStore::discover_in(tmp.path()).unwrap();
            assert_eq!(store.base(), global);
        }
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::new(tmp.path());
        assert!(store.load("nothing").is_empty());
    }

    #[test]
    fn test_malformed_file_loads_empty() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::new(tmp.path());
        std::fs::write(store.location("broken"), "info: [unclosed\n").unwrap();
        assert!(store.load("broken").is_empty());
    }

    #[test]
    fn test_save_creates_directory_and_round_trips() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::new(tmp.path().join("nested").join(STORE_DIR));

        let mut document = Document::new();
        set_key_data(&mut document, "db.keys.pool", &KeyData::new("pool", "", "size: 4"));

        let written = store.save("app", &document).unwrap();
        assert!(written.exists());

        let loaded = store.load("app");
        assert_eq!(loaded, document);
        assert_eq!(get_key_data(&loaded, "db.keys.pool").example, "size: 4");
    }

    #[test]
    fn test_save_into_file_path_fails() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("blocker");
        std::fs::write(&blocker, "not a dir").unwrap();

        let store = FileStore::new(&blocker);
        let err = store.save("app", &Document::new()).unwrap_err();
        assert!(matches!(err, RecallError::CreateDir { .. }));
    }
}
