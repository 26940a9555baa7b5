//! SimplePDL model error types.

use pdlnet_core::WorkDefinitionId;
use thiserror::Error;

/// Result type for model construction operations.
pub type PdlResult<T> = Result<T, PdlError>;

/// Errors that can occur while building a process model.
#[derive(Debug, Error)]
pub enum PdlError {
    /// Work definition not found in this process.
    #[error("work definition not found: {0}")]
    WorkDefinitionNotFound(WorkDefinitionId),
}
