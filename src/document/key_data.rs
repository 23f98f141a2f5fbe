//! The three info fields carried by every node

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::node::{Mapping, Node};

/// One of the info fields of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InfoField {
    Short,
    Long,
    Example,
}

impl InfoField {
    /// All fields, in buffer and display order.
    pub const ALL: [InfoField; 3] = [Self::Short, Self::Long, Self::Example];

    /// Key under which the field is stored in a node.
    pub fn key(self) -> &'static str {
        match self {
            Self::Short => "infoShort",
            Self::Long => "infoLong",
            Self::Example => "example",
        }
    }

    /// Section label line used in edit buffers.
    pub fn label(self) -> &'static str {
        match self {
            Self::Short => "infoShort:",
            Self::Long => "infoLong:",
            Self::Example => "example:",
        }
    }

    /// Match a trimmed buffer line against the section labels.
    pub fn from_label(line: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.label() == line)
    }

    /// Whether `key` names one of the info fields.
    pub fn is_field_key(key: &str) -> bool {
        key.parse::<Self>().is_ok()
    }
}

impl fmt::Display for InfoField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for InfoField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| format!("Unknown info field: {}", s))
    }
}

/// Projection of a node onto its info fields.
///
/// Missing fields are empty strings, so "absent" and "empty" look the same.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KeyData {
    pub info_short: String,
    pub info_long: String,
    pub example: String,
}

impl KeyData {
    pub fn new(
        info_short: impl Into<String>,
        info_long: impl Into<String>,
        example: impl Into<String>,
    ) -> Self {
        Self {
            info_short: info_short.into(),
            info_long: info_long.into(),
            example: example.into(),
        }
    }

    /// True when all three fields are empty.
    pub fn is_empty(&self) -> bool {
        self.info_short.is_empty() && self.info_long.is_empty() && self.example.is_empty()
    }

    pub fn get(&self, field: InfoField) -> &str {
        match field {
            InfoField::Short => &self.info_short,
            InfoField::Long => &self.info_long,
            InfoField::Example => &self.example,
        }
    }

    pub fn set(&mut self, field: InfoField, value: String) {
        match field {
            InfoField::Short => self.info_short = value,
            InfoField::Long => self.info_long = value,
            InfoField::Example => self.example = value,
        }
    }

    /// Read the info fields out of a node mapping. Non-string values read as empty.
    pub fn from_mapping(map: &Mapping) -> Self {
        let mut data = Self::default();
        for field in InfoField::ALL {
            if let Some(value) = map.get(field.key()).and_then(Node::as_str) {
                data.set(field, value.to_string());
            }
        }
        data
    }

    /// Overwrite the info fields of `map`, leaving every other entry alone.
    pub fn write_into(&self, map: &mut Mapping) {
        for field in InfoField::ALL {
            map.insert(field.key(), Node::string(self.get(field)));
        }
    }
}
