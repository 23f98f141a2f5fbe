//! Normalized document tree
//!
//! Every loaded document is converted from `serde_yaml::Value` into [`Node`]
//! right after parsing, so navigation never has to care which YAML shape a
//! value came from. Anything that is not a mapping is kept as an opaque leaf
//! and written back unchanged.

use indexmap::IndexMap;
use serde::Serialize;
use serde_yaml::Value;
use std::ops::Index;

/// Ordered mapping of child nodes.
///
/// Keys keep their YAML form, so entries keyed by numbers, null or whole
/// sequences survive a load and save untouched. Only string keys are
/// addressable by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Mapping {
    entries: IndexMap<Value, Node>,
}

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The child stored under the string key `name`.
    pub fn get(&self, name: &str) -> Option<&Node> {
        self.entries.get(&name_key(name))
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.entries.contains_key(&name_key(name))
    }

    /// Insert under a string key, keeping the entry's position if it exists.
    pub fn insert(&mut self, name: impl Into<String>, node: Node) -> Option<Node> {
        self.entries.insert(Value::String(name.into()), node)
    }

    /// The mapping stored under `name`, created if absent and replacing any
    /// non-mapping value already there.
    pub fn child_mapping_mut(&mut self, name: &str) -> &mut Mapping {
        self.entries
            .entry(name_key(name))
            .or_insert_with(Node::empty_mapping)
            .coerce_mapping()
    }

    /// String key names in document order. Entries with other keys are skipped.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().filter_map(Value::as_str)
    }

    /// All entries with their raw YAML keys.
    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Node)> {
        self.entries.iter()
    }
}

impl Index<&str> for Mapping {
    type Output = Node;

    fn index(&self, name: &str) -> &Node {
        match self.get(name) {
            Some(node) => node,
            None => panic!("no entry named {:?}", name),
        }
    }
}

fn name_key(name: &str) -> Value {
    Value::String(name.to_string())
}

impl From<serde_yaml::Mapping> for Mapping {
    fn from(map: serde_yaml::Mapping) -> Self {
        Self {
            entries: map
                .into_iter()
                .map(|(key, value)| (key, Node::from(value)))
                .collect(),
        }
    }
}

/// A value in a project document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Node {
    /// Any non-mapping value: string, number, bool, null, sequence or tagged value.
    Leaf(Value),
    /// A nested mapping.
    Mapping(Mapping),
}

impl Node {
    /// A fresh, empty mapping node.
    pub fn empty_mapping() -> Self {
        Self::Mapping(Mapping::new())
    }

    /// A string leaf.
    pub fn string(s: impl Into<String>) -> Self {
        Self::Leaf(Value::String(s.into()))
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self, Self::Mapping(_))
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Self::Mapping(map) => Some(map),
            Self::Leaf(_) => None,
        }
    }

    /// The string content of a string leaf.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Leaf(Value::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Turn this node into a mapping, discarding a leaf value if there is one,
    /// and return the mapping.
    pub fn coerce_mapping(&mut self) -> &mut Mapping {
        match self {
            Self::Mapping(map) => map,
            Self::Leaf(value) => {
                tracing::debug!(discarded = ?value, "Replacing non-mapping value with an empty mapping");
                *self = Self::empty_mapping();
                self.coerce_mapping()
            }
        }
    }
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::Mapping(map) => Self::Mapping(map.into()),
            other => Self::Leaf(other),
        }
    }
}

/// A whole project document: a root mapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Document {
    root: Mapping,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse YAML text.
    ///
    /// An empty file or a document whose top level is not a mapping yields an
    /// empty document.
    pub fn from_yaml_str(text: &str) -> Result<Self, serde_yaml::Error> {
        let value: Value = serde_yaml::from_str(text)?;
        Ok(match Node::from(value) {
            Node::Mapping(root) => Self { root },
            Node::Leaf(Value::Null) => Self::default(),
            Node::Leaf(other) => {
                tracing::warn!(value = ?other, "Project document is not a mapping, ignoring it");
                Self::default()
            }
        })
    }

    pub fn to_yaml_string(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    pub fn root(&self) -> &Mapping {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Mapping {
        &mut self.root
    }

    /// Number of top-level keys.
    pub fn len(&self) -> usize {
        self.root.len()
    }

    /// A document without top-level keys; callers treat it as a missing project.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }
}
