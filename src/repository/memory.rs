//! In-memory reference repository.
//!
//! Backs tests and embedders that do not bring their own storage engine.
//! One `RwLock` guards the whole tree, so single operations are atomic and
//! concurrent requests serialize at the handle, which is where the core
//! delegates all cross-request consistency.

use crate::error::StorageError;
use crate::path::ResourcePath;
use crate::repository::{EditableRepository, ResourceRepository};
use crate::resource::{Payload, Resource};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;

#[derive(Debug, Clone)]
struct NodeEntry {
    label: Option<String>,
    payload: Arc<Payload>,
}

/// Map-backed resource tree. The root node always exists.
pub struct InMemoryRepository {
    name: String,
    nodes: RwLock<BTreeMap<ResourcePath, NodeEntry>>,
}

impl InMemoryRepository {
    pub fn new(name: &str) -> Self {
        let mut nodes = BTreeMap::new();
        nodes.insert(
            ResourcePath::root(),
            NodeEntry {
                label: None,
                payload: Arc::new(Payload::Null),
            },
        );
        InMemoryRepository {
            name: name.to_string(),
            nodes: RwLock::new(nodes),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Insert or replace a node. Missing ancestors are created with a null
    /// payload so the tree never has dangling paths.
    pub fn insert(
        &self,
        path: &ResourcePath,
        label: Option<String>,
        payload: Payload,
    ) -> Result<(), StorageError> {
        if path.is_root() {
            return Err(StorageError::InvalidOperation(
                "Cannot replace the repository root.".to_string(),
            ));
        }

        let mut nodes = self.nodes.write();
        let mut ancestor = ResourcePath::root();
        for segment in path.segments() {
            ancestor = ancestor.join(segment)?;
            nodes.entry(ancestor.clone()).or_insert_with(|| NodeEntry {
                label: None,
                payload: Arc::new(Payload::Null),
            });
        }
        nodes.insert(
            path.clone(),
            NodeEntry {
                label,
                payload: Arc::new(payload),
            },
        );
        Ok(())
    }
}

impl ResourceRepository for InMemoryRepository {
    fn get(&self, path: &ResourcePath) -> Result<Resource, StorageError> {
        let nodes = self.nodes.read();
        let entry = nodes
            .get(path)
            .ok_or_else(|| StorageError::ResourceNotFound(path.to_string()))?;
        Ok(Resource {
            repository: self.name.clone(),
            path: path.clone(),
            label: entry.label.clone(),
            payload: entry.payload.clone(),
        })
    }

    fn children(&self, path: &ResourcePath) -> Result<Vec<ResourcePath>, StorageError> {
        let nodes = self.nodes.read();
        if !nodes.contains_key(path) {
            return Err(StorageError::ResourceNotFound(path.to_string()));
        }
        // BTreeMap ordering keeps the listing stable.
        Ok(nodes
            .keys()
            .filter(|candidate| candidate.parent().as_ref() == Some(path))
            .cloned()
            .collect())
    }
}

impl EditableRepository for InMemoryRepository {
    fn move_resource(
        &self,
        path: &ResourcePath,
        target: &ResourcePath,
    ) -> Result<(), StorageError> {
        if path.is_root() {
            return Err(StorageError::InvalidOperation(
                "Cannot move the repository root.".to_string(),
            ));
        }
        if target.starts_with(path) {
            return Err(StorageError::InvalidOperation(format!(
                "Cannot move {} into its own subtree.",
                path
            )));
        }

        let mut nodes = self.nodes.write();
        if !nodes.contains_key(path) {
            return Err(StorageError::ResourceNotFound(path.to_string()));
        }
        if nodes.contains_key(target) {
            return Err(StorageError::InvalidOperation(format!(
                "A resource already exists at path {}.",
                target
            )));
        }
        if let Some(parent) = target.parent() {
            if !nodes.contains_key(&parent) {
                return Err(StorageError::InvalidOperation(format!(
                    "No resource at parent path {}.",
                    parent
                )));
            }
        }

        let moved: Vec<ResourcePath> = nodes
            .keys()
            .filter(|candidate| candidate.starts_with(path))
            .cloned()
            .collect();
        for old_path in moved {
            if let Some(new_path) = old_path.rebased(path, target) {
                if let Some(entry) = nodes.remove(&old_path) {
                    nodes.insert(new_path, entry);
                }
            }
        }
        Ok(())
    }

    fn remove(&self, path: &ResourcePath) -> Result<(), StorageError> {
        if path.is_root() {
            return Err(StorageError::InvalidOperation(
                "Cannot remove the repository root.".to_string(),
            ));
        }

        let mut nodes = self.nodes.write();
        if !nodes.contains_key(path) {
            return Err(StorageError::ResourceNotFound(path.to_string()));
        }
        let removed: Vec<ResourcePath> = nodes
            .keys()
            .filter(|candidate| candidate.starts_with(path))
            .cloned()
            .collect();
        for victim in removed {
            nodes.remove(&victim);
        }
        Ok(())
    }
}
