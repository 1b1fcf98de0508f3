//! Batched structural mutations.
//!
//! A batch is a non-empty ordered list of declarative operations decoded
//! from one JSON request body and applied to one resource path. Execution
//! is strictly in submission order, one operation validated and applied at
//! a time, with no rollback: a failure partway through leaves every
//! earlier operation committed. Callers learn exactly where the batch
//! failed from the surfaced `BadRequest` message.

use crate::error::GatewayError;
use crate::path::ResourcePath;
use crate::repository::EditableRepository;
use serde::Deserialize;
use tracing::debug;

pub const UNSUPPORTED_BODY_MESSAGE: &str = "Only JSON request bodies are supported.";
pub const UNSUPPORTED_OPERATION_MESSAGE: &str = "Only move operation is supported.";
pub const MISSING_TARGET_MESSAGE: &str = "Move operation requires a target path.";

/// One declarative mutation request.
///
/// The kind is kept as a raw string on purpose: unsupported kinds must be
/// rejected when their turn comes, after earlier operations have already
/// been applied, not at decode time.
#[derive(Debug, Clone, Deserialize)]
pub struct Operation {
    pub operation: String,
    #[serde(default)]
    pub target: Option<String>,
}

/// Decode a request body into a batch.
///
/// Anything that is not a well-formed, non-empty JSON array of operation
/// objects is a `BadRequest`; the repository handle is never touched.
pub fn decode(body: &str) -> Result<Vec<Operation>, GatewayError> {
    let batch: Vec<Operation> = serde_json::from_str(body)
        .map_err(|_| GatewayError::BadRequest(UNSUPPORTED_BODY_MESSAGE.to_string()))?;
    if batch.is_empty() {
        return Err(GatewayError::BadRequest(UNSUPPORTED_BODY_MESSAGE.to_string()));
    }
    Ok(batch)
}

/// Applies decoded batches against a writable repository.
#[derive(Debug, Default)]
pub struct BatchProcessor;

impl BatchProcessor {
    pub fn new() -> Self {
        BatchProcessor
    }

    /// Apply `batch` to `base_path`, in order.
    ///
    /// Every operation addresses the request path; the base path is not
    /// re-targeted after an in-batch move, so a second move of the same
    /// resource fails at the handle and surfaces as `BadRequest`.
    pub fn apply(
        &self,
        repository: &dyn EditableRepository,
        base_path: &ResourcePath,
        batch: &[Operation],
    ) -> Result<(), GatewayError> {
        for (index, operation) in batch.iter().enumerate() {
            match operation.operation.as_str() {
                "move" => {
                    let raw_target = operation
                        .target
                        .as_deref()
                        .ok_or_else(|| GatewayError::BadRequest(MISSING_TARGET_MESSAGE.to_string()))?;
                    let target = ResourcePath::parse(raw_target)
                        .map_err(|e| GatewayError::BadRequest(e.to_string()))?;
                    repository
                        .move_resource(base_path, &target)
                        .map_err(GatewayError::from_mutation)?;
                    debug!(%base_path, %target, index, "move applied");
                }
                _ => {
                    return Err(GatewayError::BadRequest(
                        UNSUPPORTED_OPERATION_MESSAGE.to_string(),
                    ));
                }
            }
        }
        Ok(())
    }
}
