//! HTTP API server for salesdash.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short closure params are idiomatic")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]

pub mod api_error;
mod handlers;
mod query_types;
mod response_types;

use axum::{
    routing::{get, post, put},
    Json, Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use salesdash_service::{AskService, DashboardService, FaqService};

pub use response_types::{FaqDeleteResponse, VersionResponse};

/// Shared application state for all HTTP handlers.
pub struct AppState {
    /// Prompt building and generation behind `/api/askGemini`
    pub ask_service: Arc<AskService>,
    /// Persisted FAQ collection
    pub faq_service: Arc<FaqService>,
    /// Sales series and the customer table
    pub dashboard: Arc<DashboardService>,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/api/version", get(version))
        .route("/api/askGemini", post(handlers::ask::ask_gemini))
        .route("/api/sales", get(handlers::dashboard::get_sales))
        .route("/api/customers", get(handlers::dashboard::get_customers))
        .route("/api/customers/export", get(handlers::dashboard::export_customers))
        .route("/api/summary", get(handlers::dashboard::get_summary))
        .route("/api/faqs", get(handlers::faqs::list_faqs).post(handlers::faqs::create_faq))
        .route(
            "/api/faqs/{id}",
            put(handlers::faqs::update_faq).delete(handlers::faqs::delete_faq),
        )
        .layer(cors)
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}
