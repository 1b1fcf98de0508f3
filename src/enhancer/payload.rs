//! Payload enhancer: depth-limited recursive payload serialization.

use crate::enhancer::Enhancer;
use crate::error::GatewayError;
use crate::representation::Representation;
use crate::resource::{Payload, Resource};
use serde_json::{Map, Number, Value};

/// Rendered in place of nodes past the configured depth limit.
pub const MAX_DEPTH_PLACEHOLDER: &str = "<max depth exceeded>";

/// Rendered in place of a node already on the current descent stack.
pub const RECURSION_PLACEHOLDER: &str = "<recursive>";

/// Attaches the resource's serialized payload under a `payload` field.
///
/// The serializer carries an explicit depth counter and a visited-node
/// guard (pointer identity on the descent stack), so deeply nested or
/// shared payload graphs render as bounded output instead of recursing
/// without limit.
pub struct PayloadEnhancer {
    max_depth: usize,
}

impl PayloadEnhancer {
    pub fn new(max_depth: usize) -> Self {
        PayloadEnhancer { max_depth }
    }
}

impl Enhancer for PayloadEnhancer {
    fn enhance(
        &self,
        data: &mut Representation,
        resource: &Resource,
    ) -> Result<(), GatewayError> {
        let mut visiting: Vec<*const Payload> = Vec::new();
        data.set(
            "payload",
            serialize(&resource.payload, 0, self.max_depth, &mut visiting),
        );
        Ok(())
    }
}

fn serialize(
    payload: &Payload,
    depth: usize,
    max_depth: usize,
    visiting: &mut Vec<*const Payload>,
) -> Value {
    if depth > max_depth {
        return Value::String(MAX_DEPTH_PLACEHOLDER.to_string());
    }
    let identity = payload as *const Payload;
    if visiting.contains(&identity) {
        return Value::String(RECURSION_PLACEHOLDER.to_string());
    }

    match payload {
        Payload::Null => Value::Null,
        Payload::Bool(value) => Value::Bool(*value),
        Payload::Integer(value) => Value::Number(Number::from(*value)),
        // Non-finite floats have no JSON form; the null policy keeps the
        // field present.
        Payload::Float(value) => Number::from_f64(*value)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        Payload::Text(value) => Value::String(value.clone()),
        Payload::List(items) => {
            visiting.push(identity);
            let rendered = items
                .iter()
                .map(|item| serialize(item, depth + 1, max_depth, visiting))
                .collect();
            visiting.pop();
            Value::Array(rendered)
        }
        Payload::Map(entries) => {
            visiting.push(identity);
            let mut rendered = Map::new();
            for (key, value) in entries {
                rendered.insert(
                    key.clone(),
                    serialize(value, depth + 1, max_depth, visiting),
                );
            }
            visiting.pop();
            Value::Object(rendered)
        }
    }
}
