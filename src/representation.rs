//! Resource representations.
//!
//! A representation is the field map sent back for a resource: structural
//! base fields first, then every field the registered enhancers
//! contribute, in registration order. Null-valued fields are kept so
//! clients see a stable, complete field set per resource kind.

use serde_json::{Map, Value};
use tracing::warn;

/// Field map built during serialization. Field order is insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Representation {
    fields: Map<String, Value>,
}

impl Representation {
    pub fn new() -> Self {
        Representation { fields: Map::new() }
    }

    /// Write a field. Overwriting an existing field is a configuration
    /// error between enhancers; the write still wins (last writer takes
    /// precedence) but it is logged so the collision is never silent.
    pub fn set(&mut self, name: &str, value: Value) {
        if self.fields.contains_key(name) {
            warn!(field = name, "representation field overwritten by a later contributor");
        }
        self.fields.insert(name.to_string(), value);
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(|name| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The representation as a JSON object value.
    pub fn into_json(self) -> Value {
        Value::Object(self.fields)
    }
}
