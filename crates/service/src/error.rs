//! Typed error enum for the service layer.
//!
//! Unifies storage, generation and gateway failures into a single error type
//! so the HTTP layer can map each failure mode to its own status code.

use salesdash_core::SalesdashError;
use salesdash_llm::{GatewayError, LlmError};
use salesdash_storage::StorageError;
use thiserror::Error;

/// Service-layer error.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The ask request had no question. Nothing was sent downstream.
    #[error("missing input: user input is required")]
    MissingInput,

    /// Caller provided invalid input (blank FAQ fields, unknown column).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Entity with the given id does not exist.
    #[error("not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    /// The text-generation call failed.
    #[error("generation failed: {0}")]
    DownstreamGenerationFailure(#[source] LlmError),

    /// Calling the ask gateway failed or its answer was unusable.
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// Storage operation failed.
    #[error("storage: {0}")]
    Storage(#[from] StorageError),
}

impl ServiceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<SalesdashError> for ServiceError {
    fn from(err: SalesdashError) -> Self {
        match err {
            SalesdashError::InvalidInput(msg) => Self::InvalidInput(msg),
            other => Self::InvalidInput(other.to_string()),
        }
    }
}
