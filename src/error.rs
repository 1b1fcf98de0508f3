//! Error types for the resource tree gateway.

use thiserror::Error;

/// Storage-level errors reported by repository handles.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("No resource at path {0}")]
    ResourceNotFound(String),

    #[error("{0}")]
    InvalidOperation(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Storage I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Client-facing errors produced by the gateway.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Repository not found: {0}")]
    RepositoryNotFound(String),

    #[error("Resource not found: {path} in repository {repository}")]
    ResourceNotFound { repository: String, path: String },

    #[error("Repository {0} is not editable.")]
    NotEditable(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Storage error: {0}")]
    StorageError(#[from] StorageError),
}

impl GatewayError {
    /// Translate a storage failure raised by a mutation (move/remove) into
    /// the client-facing taxonomy. Handle-level validation becomes a
    /// `BadRequest` carrying the handle's message; anything else stays a
    /// storage error.
    pub fn from_mutation(err: StorageError) -> Self {
        match err {
            StorageError::InvalidOperation(message) => GatewayError::BadRequest(message),
            StorageError::ResourceNotFound(path) => {
                GatewayError::BadRequest(format!("No resource at path {}", path))
            }
            other => GatewayError::StorageError(other),
        }
    }

    /// HTTP-equivalent status code for this error.
    ///
    /// `NotEditable` maps to 404 rather than 403: the mutating route is
    /// treated as absent so callers cannot probe repository capabilities.
    pub fn status(&self) -> u16 {
        match self {
            GatewayError::RepositoryNotFound(_) => 404,
            GatewayError::ResourceNotFound { .. } => 404,
            GatewayError::NotEditable(_) => 404,
            GatewayError::BadRequest(_) => 400,
            GatewayError::ConfigError(_) => 500,
            GatewayError::StorageError(_) => 500,
        }
    }

    /// JSON error body for client-facing failures, `{"message": "..."}`.
    pub fn message_body(&self) -> serde_json::Value {
        serde_json::json!({ "message": self.to_string() })
    }
}

impl From<config::ConfigError> for GatewayError {
    fn from(err: config::ConfigError) -> Self {
        GatewayError::ConfigError(err.to_string())
    }
}
