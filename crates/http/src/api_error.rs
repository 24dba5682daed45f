//! Typed API error for HTTP handlers.
//!
//! Converts service errors into HTTP responses with a JSON body. The `error`
//! field is always a stable message; diagnostics go into `details` and the log.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use salesdash_core::{GatewayErrorBody, GENERATION_FAILED_MESSAGE, MISSING_INPUT_MESSAGE};
use salesdash_service::ServiceError;

/// Use via `Result<Json<T>, ApiError>` in handlers.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request: invalid input from caller.
    BadRequest(String),
    /// 404 Not Found: requested resource doesn't exist.
    NotFound(String),
    /// 500 with the generic generation message and the underlying cause.
    GenerationFailed(String),
    /// 500 Internal Server Error. Details logged, not exposed.
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, plain(msg)),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, plain(msg)),
            Self::GenerationFailed(details) => {
                tracing::error!(%details, "generation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    GatewayErrorBody {
                        error: GENERATION_FAILED_MESSAGE.to_owned(),
                        details: Some(details),
                    },
                )
            },
            Self::Internal(err) => {
                tracing::error!(error = ?err, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, plain("internal server error".to_owned()))
            },
        };
        (status, Json(body)).into_response()
    }
}

fn plain(error: String) -> GatewayErrorBody {
    GatewayErrorBody { error, details: None }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::MissingInput => Self::BadRequest(MISSING_INPUT_MESSAGE.to_owned()),
            ServiceError::InvalidInput(msg) => Self::BadRequest(msg),
            ServiceError::NotFound { entity, id } => {
                Self::NotFound(format!("{entity} '{id}' not found"))
            },
            ServiceError::DownstreamGenerationFailure(e) => Self::GenerationFailed(e.to_string()),
            other => Self::Internal(other.into()),
        }
    }
}

impl From<salesdash_core::SalesdashError> for ApiError {
    fn from(err: salesdash_core::SalesdashError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}
