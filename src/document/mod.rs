//! Project document model
//!
//! A project is one YAML document: a tree of mappings whose nodes carry the
//! three info fields and an optional `keys` mapping of named children.
//! The resolver maps user key paths onto that tree.

pub mod key_data;
pub mod node;
pub mod resolver;

pub use key_data::{InfoField, KeyData};
pub use node::{Document, Mapping, Node};
pub use resolver::{get_key_data, list_subkeys, set_key_data, storage_path, KEYS, ROOT_INFO};
