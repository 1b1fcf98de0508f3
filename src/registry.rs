//! Repository registry: immutable name-to-handle mapping.
//!
//! Built once at startup and handed to the gateway at construction time.
//! There is no process-wide singleton; embedders own the registry they
//! build.

use crate::error::GatewayError;
use crate::repository::{EditableRepository, RepositoryHandle, ResourceRepository};
use std::collections::HashMap;
use std::sync::Arc;

/// Immutable mapping from repository name to handle.
pub struct RepositoryRegistry {
    repositories: HashMap<String, RepositoryHandle>,
}

impl RepositoryRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder {
            repositories: HashMap::new(),
        }
    }

    /// Resolve a repository by name.
    pub fn get(&self, name: &str) -> Result<&RepositoryHandle, GatewayError> {
        self.repositories
            .get(name)
            .ok_or_else(|| GatewayError::RepositoryNotFound(name.to_string()))
    }

    /// Registered repository names, unordered.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.repositories.keys().map(|name| name.as_str())
    }
}

/// Builder for [`RepositoryRegistry`]. Registering a name twice replaces
/// the earlier handle.
pub struct RegistryBuilder {
    repositories: HashMap<String, RepositoryHandle>,
}

impl RegistryBuilder {
    pub fn read_only(mut self, name: &str, repository: Arc<dyn ResourceRepository>) -> Self {
        self.repositories
            .insert(name.to_string(), RepositoryHandle::read_only(repository));
        self
    }

    pub fn editable(mut self, name: &str, repository: Arc<dyn EditableRepository>) -> Self {
        self.repositories
            .insert(name.to_string(), RepositoryHandle::editable(repository));
        self
    }

    pub fn build(self) -> RepositoryRegistry {
        RepositoryRegistry {
            repositories: self.repositories,
        }
    }
}
