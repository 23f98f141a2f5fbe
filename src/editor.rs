//! Interactive editing: temp buffers and the external editor process

use crate::error::{RecallError, Result};
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};
use tempfile::NamedTempFile;

/// Opens a file for the user and blocks until they are done.
pub trait EditorLauncher {
    fn edit(&self, path: &Path) -> Result<()>;
}

/// Runs an editor command such as `nano` or `code --wait`.
///
/// The command is split on whitespace; the file path is appended as the
/// last argument.
#[derive(Debug, Clone)]
pub struct CommandEditor {
    command: String,
}

impl CommandEditor {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl EditorLauncher for CommandEditor {
    fn edit(&self, path: &Path) -> Result<()> {
        let mut parts = self.command.split_whitespace();
        let program = parts.next().ok_or_else(|| RecallError::EditorLaunch {
            program: self.command.clone(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "empty editor command"),
        })?;

        tracing::debug!(editor = %self.command, file = %path.display(), "Launching editor");

        let status = Command::new(program)
            .args(parts)
            .arg(path)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| RecallError::EditorLaunch {
                program: program.to_string(),
                source,
            })?;

        if !status.success() {
            return Err(RecallError::EditorStatus {
                program: program.to_string(),
                status,
            });
        }

        Ok(())
    }
}

/// A temporary edit buffer on disk, deleted when dropped.
pub struct TempBuffer {
    file: NamedTempFile,
}

impl TempBuffer {
    /// Write `text` to a fresh `recall_edit_*.txt` file in the temp directory.
    pub fn create(text: &str) -> Result<Self> {
        let mut file = tempfile::Builder::new()
            .prefix("recall_edit_")
            .suffix(".txt")
            .tempfile()
            .map_err(RecallError::CreateBuffer)?;
        file.write_all(text.as_bytes())
            .and_then(|_| file.flush())
            .map_err(RecallError::CreateBuffer)?;
        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Current contents, as left by the editor.
    pub fn read(&self) -> Result<String> {
        std::fs::read_to_string(self.path()).map_err(|source| RecallError::ReadBuffer {
            path: self.path().to_path_buf(),
            source,
        })
    }
}
