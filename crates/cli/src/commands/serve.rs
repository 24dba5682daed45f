use anyhow::Result;
use salesdash_core::{env_parse_with_default, DEFAULT_PORT};
use salesdash_http::{create_router, AppState};
use salesdash_llm::GeminiClient;
use salesdash_service::{AskService, DashboardService, FaqService};
use salesdash_storage::{FaqRepository, SqliteStore};
use std::path::PathBuf;
use std::sync::Arc;

use crate::{ensure_db_dir, get_api_key, get_base_url, get_db_path, get_model};

pub(crate) async fn run(port: Option<u16>, host: String, db: Option<PathBuf>) -> Result<()> {
    let db_path = get_db_path(db);
    ensure_db_dir(&db_path)?;
    let store = Arc::new(SqliteStore::new(&db_path)?);
    let faq_service = FaqService::open(Arc::new(FaqRepository::new(store))).await?;

    let gemini = GeminiClient::new(get_api_key(), get_base_url())?.with_model(get_model());
    tracing::info!(model = gemini.model(), base_url = gemini.base_url(), "Gemini client ready");

    let state = Arc::new(AppState {
        ask_service: Arc::new(AskService::new(Arc::new(gemini))),
        faq_service: Arc::new(faq_service),
        dashboard: Arc::new(DashboardService::with_sample_data()),
    });

    let router = create_router(state);
    let port = port.unwrap_or_else(|| env_parse_with_default("SALESDASH_PORT", DEFAULT_PORT));
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
