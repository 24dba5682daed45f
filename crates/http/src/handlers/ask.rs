use axum::{body::Bytes, extract::State, Json};
use std::sync::Arc;

use salesdash_core::{AskRequest, AskResponse};

use crate::api_error::ApiError;
use crate::AppState;

/// Parses the body by hand so every failure keeps the `{error}` shape.
pub async fn ask_gemini(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<AskResponse>, ApiError> {
    let request = parse_ask_body(&body)?;
    tracing::info!(
        has_summary = request.dashboard_data_summary.is_some(),
        "ask request received"
    );
    let answer = state.ask_service.ask(&request).await?;
    Ok(Json(AskResponse { answer }))
}

/// An empty body is a request without input, not a malformed one.
fn parse_ask_body(body: &[u8]) -> Result<AskRequest, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(AskRequest::default());
    }
    serde_json::from_slice(body)
        .map_err(|e| ApiError::BadRequest(format!("Invalid request body: {e}")))
}
