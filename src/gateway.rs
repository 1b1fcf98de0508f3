//! Resource gateway: the single entry point for get/patch/delete.
//!
//! Resolves the repository handle via the registry, enforces the
//! writability precondition for mutations, delegates batch execution to
//! the batch processor, and drives the enhancement pipeline when
//! producing output. All state is request-scoped; nothing is cached
//! across calls.

use crate::batch::{self, BatchProcessor};
use crate::enhancer::EnhancementPipeline;
use crate::error::{GatewayError, StorageError};
use crate::path::ResourcePath;
use crate::registry::RepositoryRegistry;
use crate::representation::Representation;
use crate::repository::EditableRepository;
use std::sync::Arc;
use tracing::{debug, info};

pub struct ResourceGateway {
    registry: Arc<RepositoryRegistry>,
    pipeline: EnhancementPipeline,
    processor: BatchProcessor,
}

impl ResourceGateway {
    pub fn new(registry: Arc<RepositoryRegistry>, pipeline: EnhancementPipeline) -> Self {
        ResourceGateway {
            registry,
            pipeline,
            processor: BatchProcessor::new(),
        }
    }

    /// Fetch a resource and build its representation.
    ///
    /// Fails with a 404-equivalent when either the repository name or the
    /// path does not resolve. Performs no mutation.
    pub fn get(
        &self,
        repository_name: &str,
        raw_path: &str,
    ) -> Result<Representation, GatewayError> {
        let handle = self.registry.get(repository_name)?;
        let path = Self::read_path(repository_name, raw_path)?;
        let resource = handle.get(&path).map_err(|err| match err {
            StorageError::ResourceNotFound(path) => GatewayError::ResourceNotFound {
                repository: repository_name.to_string(),
                path,
            },
            other => GatewayError::StorageError(other),
        })?;

        debug!(repository = repository_name, path = %path, "resource fetched");
        self.pipeline.build(&resource)
    }

    /// Decode and apply a batch of structural operations.
    ///
    /// The writability check runs first: a read-only repository never
    /// reaches body decoding or the batch processor.
    pub fn patch(
        &self,
        repository_name: &str,
        raw_path: &str,
        body: &str,
    ) -> Result<(), GatewayError> {
        let repository = self.editable(repository_name)?;
        let path = ResourcePath::parse(raw_path)
            .map_err(|err| GatewayError::BadRequest(err.to_string()))?;
        let operations = batch::decode(body)?;

        self.processor
            .apply(repository.as_ref(), &path, &operations)?;
        info!(
            repository = repository_name,
            path = %path,
            operations = operations.len(),
            "batch applied"
        );
        Ok(())
    }

    /// Remove a resource. Empty success result (HTTP 204 analog).
    pub fn delete(&self, repository_name: &str, raw_path: &str) -> Result<(), GatewayError> {
        let repository = self.editable(repository_name)?;
        let path = ResourcePath::parse(raw_path)
            .map_err(|err| GatewayError::BadRequest(err.to_string()))?;

        repository
            .remove(&path)
            .map_err(GatewayError::from_mutation)?;
        info!(repository = repository_name, path = %path, "resource removed");
        Ok(())
    }

    fn editable(
        &self,
        repository_name: &str,
    ) -> Result<&Arc<dyn EditableRepository>, GatewayError> {
        let handle = self.registry.get(repository_name)?;
        handle
            .as_editable()
            .ok_or_else(|| GatewayError::NotEditable(repository_name.to_string()))
    }

    /// An unparseable path on a read resolves like an unknown one.
    fn read_path(repository_name: &str, raw_path: &str) -> Result<ResourcePath, GatewayError> {
        ResourcePath::parse(raw_path).map_err(|_| GatewayError::ResourceNotFound {
            repository: repository_name.to_string(),
            path: raw_path.to_string(),
        })
    }
}
