//! Children enhancer: child-name listing.
//!
//! Children are not part of the base representation; they are materialized
//! only when this enhancer is registered.

use crate::enhancer::Enhancer;
use crate::error::{GatewayError, StorageError};
use crate::registry::RepositoryRegistry;
use crate::representation::Representation;
use crate::resource::Resource;
use serde_json::json;
use std::sync::Arc;

/// Attaches a `children` array with the names of the resource's direct
/// children, in the handle's stable listing order.
pub struct ChildrenEnhancer {
    registry: Arc<RepositoryRegistry>,
}

impl ChildrenEnhancer {
    pub fn new(registry: Arc<RepositoryRegistry>) -> Self {
        ChildrenEnhancer { registry }
    }
}

impl Enhancer for ChildrenEnhancer {
    fn enhance(
        &self,
        data: &mut Representation,
        resource: &Resource,
    ) -> Result<(), GatewayError> {
        let handle = self.registry.get(&resource.repository)?;
        // The resource can vanish between the gateway's fetch and this
        // listing; report that like any other missing resource, not as a
        // generic storage failure.
        let children = handle.children(&resource.path).map_err(|err| match err {
            StorageError::ResourceNotFound(path) => GatewayError::ResourceNotFound {
                repository: resource.repository.clone(),
                path,
            },
            other => GatewayError::StorageError(other),
        })?;
        let names: Vec<String> = children
            .iter()
            .filter_map(|child| child.name().map(str::to_string))
            .collect();
        data.set("children", json!(names));
        Ok(())
    }
}
