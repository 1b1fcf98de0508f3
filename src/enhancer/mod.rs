//! Serialization enhancement pipeline.
//!
//! Enhancers are pluggable units that contribute fields to a resource's
//! representation. The pipeline runs them strictly in registration order,
//! after the base serializer has written the structural fields, so later
//! enhancers observe everything earlier ones wrote. An enhancer failure
//! fails the whole representation build; a partial field set would be
//! indistinguishable from a differently-configured pipeline.

pub mod children;
pub mod links;
pub mod payload;

pub use children::ChildrenEnhancer;
pub use links::{LinkEnhancer, StaticPrefixUrlGenerator, UrlGenerator};
pub use payload::{PayloadEnhancer, MAX_DEPTH_PLACEHOLDER, RECURSION_PLACEHOLDER};

use crate::error::GatewayError;
use crate::representation::Representation;
use crate::resource::Resource;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::debug;

/// A unit of representation enhancement.
///
/// Implementations may read the resource's payload and any fields already
/// accumulated, and add or overwrite fields on the representation.
pub trait Enhancer: Send + Sync {
    fn enhance(
        &self,
        data: &mut Representation,
        resource: &Resource,
    ) -> Result<(), GatewayError>;
}

/// Ordered collection of enhancers plus the base serializer.
#[derive(Default)]
pub struct EnhancementPipeline {
    enhancers: Vec<Arc<dyn Enhancer>>,
}

impl EnhancementPipeline {
    pub fn new() -> Self {
        EnhancementPipeline { enhancers: vec![] }
    }

    pub fn with_enhancers(enhancers: Vec<Arc<dyn Enhancer>>) -> Self {
        EnhancementPipeline { enhancers }
    }

    /// Append an enhancer. Order of registration is order of execution.
    pub fn push(&mut self, enhancer: Arc<dyn Enhancer>) {
        self.enhancers.push(enhancer);
    }

    /// Build the representation for a resource: structural base fields
    /// first, then each enhancer in registration order.
    pub fn build(&self, resource: &Resource) -> Result<Representation, GatewayError> {
        let mut data = Representation::new();
        data.set("repository", json!(resource.repository));
        data.set("path", json!(resource.path.to_string()));
        data.set(
            "name",
            resource.path.name().map(|n| json!(n)).unwrap_or(Value::Null),
        );
        data.set(
            "label",
            resource
                .label
                .as_ref()
                .map(|l| json!(l))
                .unwrap_or(Value::Null),
        );

        for enhancer in &self.enhancers {
            enhancer.enhance(&mut data, resource)?;
        }

        debug!(
            repository = %resource.repository,
            path = %resource.path,
            fields = data.len(),
            "representation built"
        );
        Ok(data)
    }
}
