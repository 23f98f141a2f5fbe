//! Key path resolution
//!
//! User key paths are lists of names. Between two consecutive names the
//! document has an implicit `keys` level, so `["db", "pool"]` lives at the
//! storage path `db.keys.pool`. The empty path is the project's own info,
//! stored under the top-level `info` key.
//!
//! Reads never fail: anything missing or of the wrong shape reads as empty.
//! Writes create missing levels and replace non-mapping values on the way.

use super::key_data::{InfoField, KeyData};
use super::node::{Document, Mapping, Node};

/// Storage key holding the project's general info.
pub const ROOT_INFO: &str = "info";

/// Storage key holding a node's named children.
pub const KEYS: &str = "keys";

const KEYS_HOP: &str = ".keys.";

/// Build the storage path for a list of user segments.
///
/// `[]` gives `""`, `[a]` gives `a`, `[a, b, c]` gives `a.keys.b.keys.c`.
pub fn storage_path<S: AsRef<str>>(segments: &[S]) -> String {
    segments
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(KEYS_HOP)
}

fn effective(path: &str) -> &str {
    if path.is_empty() {
        ROOT_INFO
    } else {
        path
    }
}

/// Read the info fields at a dot-separated storage path.
pub fn get_key_data(document: &Document, path: &str) -> KeyData {
    let parts: Vec<&str> = effective(path).split('.').collect();
    let Some((last, intermediate)) = parts.split_last() else {
        return KeyData::default();
    };

    let mut current = document.root();
    for part in intermediate {
        match current.get(*part).and_then(Node::as_mapping) {
            Some(next) => current = next,
            None => return KeyData::default(),
        }
    }

    current
        .get(*last)
        .and_then(Node::as_mapping)
        .map(KeyData::from_mapping)
        .unwrap_or_default()
}

/// Write the info fields at a dot-separated storage path, creating the path.
///
/// Existing entries of the target node other than the info fields are kept.
pub fn set_key_data(document: &mut Document, path: &str, data: &KeyData) {
    let parts: Vec<&str> = effective(path).split('.').collect();
    let Some((last, intermediate)) = parts.split_last() else {
        return;
    };

    let mut current: &mut Mapping = document.root_mut();
    for part in intermediate {
        current = current.child_mapping_mut(part);
    }

    data.write_into(current.child_mapping_mut(last));

    tracing::debug!(path = %effective(path), "Stored key data");
}

/// Names of the sub-keys available below a storage path, in document order.
///
/// The root (empty path or `info`) falls back to the top-level keys when it
/// has no `keys` mapping, leaving out `info` and the info field names.
pub fn list_subkeys(document: &Document, path: &str) -> Vec<String> {
    let at_root = path.is_empty() || path == ROOT_INFO;

    let node = if at_root {
        document.root()
    } else {
        let mut current = document.root();
        for part in path.split(KEYS_HOP).filter(|part| !part.is_empty()) {
            match current.get(part).and_then(Node::as_mapping) {
                Some(next) => current = next,
                None => return Vec::new(),
            }
        }
        current
    };

    if let Some(keys) = node.get(KEYS) {
        return keys
            .as_mapping()
            .map(|keys| keys.names().map(str::to_string).collect())
            .unwrap_or_default();
    }

    if !at_root {
        return Vec::new();
    }

    node.names()
        .filter(|key| *key != ROOT_INFO && !InfoField::is_field_key(key))
        .map(str::to_string)
        .collect()
}
