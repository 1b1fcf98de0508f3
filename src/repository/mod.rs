//! Repository handles.
//!
//! A repository is a named resource tree consumed through a capability
//! boundary: read access comes from [`ResourceRepository`], structural
//! mutation from [`EditableRepository`]. A [`RepositoryHandle`] tags which
//! capability a registered repository actually exposes, so writable-only
//! operations are unreachable on read-only registrations.

pub mod memory;

pub use memory::InMemoryRepository;

use crate::error::StorageError;
use crate::path::ResourcePath;
use crate::resource::Resource;
use std::sync::Arc;

/// Read access to a resource tree.
pub trait ResourceRepository: Send + Sync {
    /// Fetch the resource at `path`.
    fn get(&self, path: &ResourcePath) -> Result<Resource, StorageError>;

    /// List the direct children of `path`, in stable order.
    fn children(&self, path: &ResourcePath) -> Result<Vec<ResourcePath>, StorageError>;
}

/// Structural mutation on top of read access.
///
/// Single operations are assumed atomic at the handle level; the core
/// never retries them.
pub trait EditableRepository: ResourceRepository {
    /// Move the subtree at `path` to `target`.
    fn move_resource(&self, path: &ResourcePath, target: &ResourcePath)
        -> Result<(), StorageError>;

    /// Remove the subtree at `path`.
    fn remove(&self, path: &ResourcePath) -> Result<(), StorageError>;
}

/// Capability-tagged handle to a registered repository.
///
/// A repository is either fully read-only or fully editable; there is no
/// partial-capability mode.
#[derive(Clone)]
pub enum RepositoryHandle {
    ReadOnly(Arc<dyn ResourceRepository>),
    Editable(Arc<dyn EditableRepository>),
}

impl std::fmt::Debug for RepositoryHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RepositoryHandle::ReadOnly(_) => f.write_str("RepositoryHandle::ReadOnly"),
            RepositoryHandle::Editable(_) => f.write_str("RepositoryHandle::Editable"),
        }
    }
}

impl RepositoryHandle {
    pub fn read_only(repository: Arc<dyn ResourceRepository>) -> Self {
        RepositoryHandle::ReadOnly(repository)
    }

    pub fn editable(repository: Arc<dyn EditableRepository>) -> Self {
        RepositoryHandle::Editable(repository)
    }

    pub fn is_writable(&self) -> bool {
        matches!(self, RepositoryHandle::Editable(_))
    }

    /// The editable capability, when this handle carries it.
    pub fn as_editable(&self) -> Option<&Arc<dyn EditableRepository>> {
        match self {
            RepositoryHandle::ReadOnly(_) => None,
            RepositoryHandle::Editable(repository) => Some(repository),
        }
    }

    pub fn get(&self, path: &ResourcePath) -> Result<Resource, StorageError> {
        match self {
            RepositoryHandle::ReadOnly(repository) => repository.get(path),
            RepositoryHandle::Editable(repository) => repository.get(path),
        }
    }

    pub fn children(&self, path: &ResourcePath) -> Result<Vec<ResourcePath>, StorageError> {
        match self {
            RepositoryHandle::ReadOnly(repository) => repository.children(path),
            RepositoryHandle::Editable(repository) => repository.children(path),
        }
    }
}
