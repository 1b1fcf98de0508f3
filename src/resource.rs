//! Resource and payload model.
//!
//! A resource is an addressable node in a repository tree: a path, an
//! optional label, and an opaque payload. The payload is a value tree the
//! core never interprets; it is only walked by the depth-limited payload
//! serializer at representation time.

use crate::path::ResourcePath;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Opaque payload attached to a resource.
///
/// Children are `Arc`-shared so payload graphs can reference common
/// subtrees without copying them per parent.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    List(Vec<Arc<Payload>>),
    Map(BTreeMap<String, Arc<Payload>>),
}

impl Payload {
    /// Build a map payload from key/value pairs.
    pub fn map<I>(entries: I) -> Payload
    where
        I: IntoIterator<Item = (String, Payload)>,
    {
        Payload::Map(
            entries
                .into_iter()
                .map(|(key, value)| (key, Arc::new(value)))
                .collect(),
        )
    }

    /// Build a list payload.
    pub fn list<I>(items: I) -> Payload
    where
        I: IntoIterator<Item = Payload>,
    {
        Payload::List(items.into_iter().map(Arc::new).collect())
    }
}

impl From<&str> for Payload {
    fn from(value: &str) -> Self {
        Payload::Text(value.to_string())
    }
}

impl From<i64> for Payload {
    fn from(value: i64) -> Self {
        Payload::Integer(value)
    }
}

impl From<bool> for Payload {
    fn from(value: bool) -> Self {
        Payload::Bool(value)
    }
}

/// An addressable node fetched from a repository handle.
///
/// Existence is authoritative only via the handle; the core never caches
/// resources across requests.
#[derive(Debug, Clone)]
pub struct Resource {
    /// Name of the repository this resource was fetched from.
    pub repository: String,
    /// Absolute path within the repository.
    pub path: ResourcePath,
    /// Optional human-readable label. Serialized as an explicit `null`
    /// when absent.
    pub label: Option<String>,
    /// Opaque payload, shared with the repository's stored entry.
    pub payload: Arc<Payload>,
}
