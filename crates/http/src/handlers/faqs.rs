use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use std::sync::Arc;

use salesdash_core::FaqEntry;

use crate::api_error::ApiError;
use crate::query_types::FaqRequest;
use crate::response_types::FaqDeleteResponse;
use crate::AppState;

pub async fn list_faqs(State(state): State<Arc<AppState>>) -> Json<Vec<FaqEntry>> {
    Json(state.faq_service.list().await)
}

pub async fn create_faq(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<FaqRequest>, JsonRejection>,
) -> Result<Json<FaqEntry>, ApiError> {
    let Json(req) = payload?;
    let entry = state.faq_service.add(req.into()).await?;
    Ok(Json(entry))
}

pub async fn update_faq(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<FaqRequest>, JsonRejection>,
) -> Result<Json<FaqEntry>, ApiError> {
    let Json(req) = payload?;
    let entry = state.faq_service.update(&id, req.into()).await?;
    Ok(Json(entry))
}

pub async fn delete_faq(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<FaqDeleteResponse>, ApiError> {
    if !state.faq_service.delete(&id).await? {
        return Err(ApiError::NotFound(format!("faq '{id}' not found")));
    }
    Ok(Json(FaqDeleteResponse { success: true, id }))
}
