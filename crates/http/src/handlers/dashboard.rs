use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use salesdash_core::{export_filename, CustomerRecord, SalesRecord};
use salesdash_service::DashboardSummaries;

use crate::api_error::ApiError;
use crate::query_types::{CustomerListQuery, ExportQuery, SalesQuery};
use crate::AppState;

pub async fn get_sales(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SalesQuery>,
) -> Result<Json<Vec<SalesRecord>>, ApiError> {
    let period = params.to_period()?;
    Ok(Json(state.dashboard.sales(period).to_vec()))
}

pub async fn get_customers(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CustomerListQuery>,
) -> Result<Json<Vec<CustomerRecord>>, ApiError> {
    let query = params.to_query()?;
    let customers = state.dashboard.customers(&query).into_iter().cloned().collect();
    Ok(Json(customers))
}

pub async fn export_customers(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ExportQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let query = params.to_query()?;
    let options = params.to_options()?;
    let csv = state.dashboard.export_csv(&query, &options);

    let filename = export_filename(chrono::Utc::now().date_naive());
    tracing::info!(%filename, "customer export");
    let headers = [
        (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_owned()),
        (header::CONTENT_DISPOSITION, format!("attachment; filename=\"{filename}\"")),
    ];
    Ok((headers, csv))
}

pub async fn get_summary(State(state): State<Arc<AppState>>) -> Json<DashboardSummaries> {
    Json(state.dashboard.summaries())
}
