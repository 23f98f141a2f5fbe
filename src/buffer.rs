//! Edit-buffer text format
//!
//! A node's info fields are rendered as three labeled sections for editing
//! in a plain text editor:
//!
//! ```text
//! infoShort:
//! <short>
//!
//! infoLong:
//! <long>
//!
//! example:
//! <example>
//! ```
//!
//! Parsing is forgiving: sections may be missing or reordered, text before
//! the first label is ignored and each body is whitespace-trimmed.

use crate::document::{InfoField, KeyData};

/// Render the info fields as an edit buffer.
pub fn serialize(data: &KeyData) -> String {
    format!(
        "{}\n{}\n\n{}\n{}\n\n{}\n{}\n",
        InfoField::Short.label(),
        data.info_short,
        InfoField::Long.label(),
        data.info_long,
        InfoField::Example.label(),
        data.example,
    )
}

/// Parse an edited buffer back into info fields.
///
/// Lines starting with `#` (after trimming) are skipped everywhere, including
/// inside a section body. Sections absent from the text stay empty.
pub fn parse(text: &str) -> KeyData {
    let mut data = KeyData::default();
    let mut open: Option<(InfoField, Vec<&str>)> = None;

    for line in text.split('\n') {
        let trimmed = line.trim();
        if trimmed.starts_with('#') {
            continue;
        }

        if let Some(field) = InfoField::from_label(trimmed) {
            if let Some((previous, body)) = open.take() {
                data.set(previous, join_body(&body));
            }
            open = Some((field, Vec::new()));
        } else if let Some((_, body)) = open.as_mut() {
            body.push(line);
        }
    }

    if let Some((field, body)) = open {
        data.set(field, join_body(&body));
    }

    data
}

fn join_body(lines: &[&str]) -> String {
    lines.join("\n").trim().to_string()
}
