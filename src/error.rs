//! Error types for the storage, editor and bootstrap collaborators
//!
//! The document resolver and the buffer codec never fail; only the parts that
//! touch the filesystem or spawn processes return these.

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecallError {
    /// No home directory to hold the global store
    #[error("Cannot determine home directory")]
    NoHomeDir,

    #[error("Could not create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not serialize YAML: {0}")]
    Serialize(#[from] serde_yaml::Error),

    #[error("Could not create temp file: {0}")]
    CreateBuffer(#[source] io::Error),

    #[error("Could not read edited file {path}: {source}")]
    ReadBuffer {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not run editor '{program}': {source}")]
    EditorLaunch {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("Editor '{program}' exited with {status}")]
    EditorStatus { program: String, status: ExitStatus },
}

/// Result type alias for recall operations
pub type Result<T> = std::result::Result<T, RecallError>;
