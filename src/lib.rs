//! recall
//!
//! A per-project knowledge base for the command line:
//! - Projects are YAML documents of nested notes
//! - Each note carries a short description, a long description and an example
//! - Notes are addressed by key paths (`recall myApp database pool`)
//! - Editing goes through a plain-text buffer in the user's editor

pub mod buffer;
pub mod commands;
pub mod display;
pub mod document;
pub mod editor;
pub mod error;
pub mod store;

pub use document::{Document, KeyData};
pub use error::{RecallError, Result};

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Editor used when neither the settings file nor the environment names one.
pub const DEFAULT_EDITOR: &str = "nano";

// ============================================================================
// YAML settings (deserialization target)
// ============================================================================

/// `~/.recall/settings.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct YamlSettings {
    /// Editor command. Older settings files spell the key `Editor`.
    #[serde(alias = "Editor", skip_serializing_if = "Option::is_none")]
    pub editor: Option<String>,
    /// Colored output
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<bool>,
}

// ============================================================================
// Runtime settings (what the application actually uses)
// ============================================================================

/// Settings loaded once at startup and passed to whatever needs them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub editor: String,
    pub color: bool,
    /// Settings file that was read, if any
    pub loaded_from: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            editor: DEFAULT_EDITOR.to_string(),
            color: true,
            loaded_from: None,
        }
    }
}

impl Settings {
    /// Load from the global settings file and the environment.
    pub fn load() -> Self {
        let path = Self::default_path();
        Self::from_yaml_and_env(path.as_deref())
    }

    /// `~/.recall/settings.yaml`, when a home directory is known.
    pub fn default_path() -> Option<PathBuf> {
        store::global_dir()
            .ok()
            .map(|dir| dir.join(store::SETTINGS_FILE))
    }

    /// Load from an optional YAML file, then apply environment overrides.
    ///
    /// Editor priority: `RECALL_EDITOR` > YAML > `VISUAL` > `EDITOR` > `nano`.
    /// `NO_COLOR` (any value) disables color regardless of the YAML.
    pub fn from_yaml_and_env(yaml_path: Option<&Path>) -> Self {
        let (yaml, loaded_from) = match yaml_path {
            Some(path) => Self::load_yaml(path),
            None => (YamlSettings::default(), None),
        };

        let editor = env_non_empty("RECALL_EDITOR")
            .or(yaml.editor.filter(|e| !e.trim().is_empty()))
            .or_else(|| env_non_empty("VISUAL"))
            .or_else(|| env_non_empty("EDITOR"))
            .unwrap_or_else(|| DEFAULT_EDITOR.to_string());

        let color = std::env::var_os("NO_COLOR").is_none() && yaml.color.unwrap_or(true);

        Self {
            editor,
            color,
            loaded_from,
        }
    }

    /// Try to load and parse a settings file. Returns defaults on any failure.
    fn load_yaml(path: &Path) -> (YamlSettings, Option<PathBuf>) {
        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_yaml::from_str::<Option<YamlSettings>>(&contents) {
                Ok(settings) => {
                    tracing::debug!("Loaded settings from {}", path.display());
                    (settings.unwrap_or_default(), Some(path.to_path_buf()))
                }
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {}. Using defaults.", path.display(), e);
                    (YamlSettings::default(), None)
                }
            },
            Err(_) => {
                tracing::debug!("No settings file at {}, using defaults", path.display());
                (YamlSettings::default(), None)
            }
        }
    }
}

fn env_non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Contents written to a fresh settings file by `--init-global`.
pub fn default_settings_yaml() -> std::result::Result<String, serde_yaml::Error> {
    serde_yaml::to_string(&YamlSettings {
        editor: Some(DEFAULT_EDITOR.to_string()),
        color: Some(true),
    })
}

// ============================================================================
// Tests
// ============================================================================
