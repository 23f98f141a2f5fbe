//! Terminal rendering of lookups
//!
//! Everything writes to a caller-supplied `io::Write`, stdout in the binary
//! and a `Vec<u8>` in tests.

use crate::commands::ShowOutcome;
use crate::document::{InfoField, KeyData};
use crate::Settings;
use owo_colors::{OwoColorize, Style};
use std::io::{self, Write};

const RULE: &str = "#############################";

/// `a → b → c`
pub fn key_label<S: AsRef<str>>(segments: &[S]) -> String {
    segments
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" → ")
}

/// First line printed for a lookup.
pub fn lookup_header<S: AsRef<str>>(project: &str, segments: &[S]) -> String {
    if segments.is_empty() {
        format!("Project: {} (general info)", project)
    } else {
        format!("Project: {}, Key: {}", project, key_label(segments))
    }
}

fn section_title(field: InfoField) -> &'static str {
    match field {
        InfoField::Short => "Short:",
        InfoField::Long => "Description:",
        InfoField::Example => "Example:",
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.color)
    }

    fn emphasized(&self, out: &mut impl Write, text: &str) -> io::Result<()> {
        if self.color {
            writeln!(out, "{}", text.style(Style::new().green().bold()))
        } else {
            writeln!(out, "{}", text)
        }
    }

    fn banner(&self, out: &mut impl Write, title: &str) -> io::Result<()> {
        writeln!(out)?;
        self.emphasized(out, RULE)?;
        self.emphasized(out, title)
    }

    /// Render a lookup as human-readable text.
    pub fn render_show<S: AsRef<str>>(
        &self,
        out: &mut impl Write,
        project: &str,
        segments: &[S],
        outcome: &ShowOutcome,
    ) -> io::Result<()> {
        writeln!(out, "{}", lookup_header(project, segments))?;

        match outcome {
            ShowOutcome::ProjectNotFound => writeln!(
                out,
                "[ERROR] Project '{}' not found. Use --edit to create it.",
                project
            ),
            ShowOutcome::Empty { subkeys } => {
                if segments.is_empty() {
                    writeln!(
                        out,
                        "[INFO] No general info found for project '{}'. Use --edit to add it.",
                        project
                    )?;
                } else {
                    writeln!(
                        out,
                        "[INFO] Key '{}' not found or is empty. Use --edit to create it.",
                        key_label(segments)
                    )?;
                }
                self.render_subkeys(out, subkeys)
            }
            ShowOutcome::Found { data, subkeys } => {
                self.render_fields(out, data)?;
                self.render_subkeys(out, subkeys)
            }
        }
    }

    fn render_fields(&self, out: &mut impl Write, data: &KeyData) -> io::Result<()> {
        for field in InfoField::ALL {
            let value = data.get(field);
            if value.is_empty() {
                continue;
            }
            self.banner(out, section_title(field))?;
            writeln!(out, "{}", value)?;
        }
        Ok(())
    }

    fn render_subkeys(&self, out: &mut impl Write, subkeys: &[String]) -> io::Result<()> {
        if subkeys.is_empty() {
            return Ok(());
        }
        self.banner(out, "Available sub-keys:")?;
        for key in subkeys {
            writeln!(out, "  • {}", key)?;
        }
        Ok(())
    }
}

/// Render a lookup as pretty JSON.
pub fn render_json<S: AsRef<str>>(
    out: &mut impl Write,
    project: &str,
    segments: &[S],
    outcome: &ShowOutcome,
) -> io::Result<()> {
    let key: Vec<&str> = segments.iter().map(AsRef::as_ref).collect();
    let value = match outcome {
        ShowOutcome::ProjectNotFound => serde_json::json!({
            "project": project,
            "key": key,
            "projectFound": false,
        }),
        ShowOutcome::Empty { subkeys } => serde_json::json!({
            "project": project,
            "key": key,
            "projectFound": true,
            "empty": true,
            "data": KeyData::default(),
            "subkeys": subkeys,
        }),
        ShowOutcome::Found { data, subkeys } => serde_json::json!({
            "project": project,
            "key": key,
            "projectFound": true,
            "empty": false,
            "data": data,
            "subkeys": subkeys,
        }),
    };
    let text = serde_json::to_string_pretty(&value).map_err(io::Error::other)?;
    writeln!(out, "{}", text)
}
