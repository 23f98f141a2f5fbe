//! `--init` / `--init-global` directory setup
//!
//! Both operations are idempotent: existing directories and settings files
//! are left untouched and reported as such.

use super::{SETTINGS_FILE, STORE_DIR};
use crate::error::{RecallError, Result};
use std::path::{Path, PathBuf};

/// What happened to a directory or file during setup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirStatus {
    Created(PathBuf),
    AlreadyExists(PathBuf),
}

impl DirStatus {
    pub fn path(&self) -> &Path {
        match self {
            Self::Created(p) | Self::AlreadyExists(p) => p,
        }
    }

    pub fn was_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }
}

/// Outcome of global initialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalInit {
    pub dir: DirStatus,
    pub settings: DirStatus,
}

/// Create `<root>/.recall`.
pub fn init_local(root: &Path) -> Result<DirStatus> {
    ensure_dir(&root.join(STORE_DIR))
}

/// Create the global store directory and a default settings file in it.
pub fn init_global(dir: &Path) -> Result<GlobalInit> {
    let dir_status = ensure_dir(dir)?;

    let settings_path = dir.join(SETTINGS_FILE);
    let settings = if settings_path.exists() {
        tracing::info!("Settings file already exists at {}", settings_path.display());
        DirStatus::AlreadyExists(settings_path)
    } else {
        let yaml = crate::default_settings_yaml()?;
        std::fs::write(&settings_path, yaml).map_err(|source| RecallError::Write {
            path: settings_path.clone(),
            source,
        })?;
        tracing::info!("Created default settings at {}", settings_path.display());
        DirStatus::Created(settings_path)
    };

    Ok(GlobalInit {
        dir: dir_status,
        settings,
    })
}

fn ensure_dir(path: &Path) -> Result<DirStatus> {
    if path.is_dir() {
        return Ok(DirStatus::AlreadyExists(path.to_path_buf()));
    }

    std::fs::create_dir_all(path).map_err(|source| RecallError::CreateDir {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!("Created {}", path.display());
    Ok(DirStatus::Created(path.to_path_buf()))
}
