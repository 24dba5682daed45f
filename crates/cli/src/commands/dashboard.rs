use anyhow::Result;
use salesdash_core::{
    export_filename, parse_columns, CustomerQuery, ExportColumn, ExportOptions, SalesPeriod,
    SortKey, SortState,
};
use salesdash_service::DashboardService;
use std::path::PathBuf;

use crate::QueryArgs;

fn build_query(args: &QueryArgs, toggles: &[SortKey]) -> CustomerQuery {
    let default = SortState::default();
    let start = SortState::new(
        args.sort_by.unwrap_or(default.key),
        args.sort_order.unwrap_or(default.direction),
    );
    let sort = toggles.iter().fold(start, |state, key| state.toggle(*key));
    CustomerQuery::new(args.search.clone(), sort)
}

pub(crate) fn run_sales(period: SalesPeriod) -> Result<()> {
    let dashboard = DashboardService::with_sample_data();
    println!("{}", serde_json::to_string_pretty(dashboard.sales(period))?);
    Ok(())
}

pub(crate) fn run_customers(args: &QueryArgs, toggles: &[SortKey]) -> Result<()> {
    let dashboard = DashboardService::with_sample_data();
    let query = build_query(args, toggles);
    tracing::debug!(?query, "listing customers");
    println!("{}", serde_json::to_string_pretty(&dashboard.customers(&query))?);
    Ok(())
}

pub(crate) fn run_export(
    args: &QueryArgs,
    columns: Option<&str>,
    delimiter: char,
    output: Option<PathBuf>,
) -> Result<()> {
    let columns = match columns {
        Some(list) => parse_columns(list)?,
        None => ExportColumn::ALL.to_vec(),
    };
    let options = ExportOptions { columns, delimiter };
    let dashboard = DashboardService::with_sample_data();
    let csv = dashboard.export_csv(&build_query(args, &[]), &options);

    let path =
        output.unwrap_or_else(|| PathBuf::from(export_filename(chrono::Utc::now().date_naive())));
    std::fs::write(&path, csv)?;
    println!("Exported to {}", path.display());
    Ok(())
}

pub(crate) fn run_summary() {
    let summaries = DashboardService::with_sample_data().summaries();
    println!("{}\n\n{}", summaries.sales, summaries.customers);
}
