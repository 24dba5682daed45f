use anyhow::{bail, Result};
use salesdash_llm::GatewayClient;
use salesdash_service::{AnalysisService, DashboardService};

use crate::get_gateway_url;

pub(crate) async fn run(gateway: Option<String>) -> Result<()> {
    let endpoint = get_gateway_url(gateway);
    let service = AnalysisService::new(GatewayClient::new(endpoint)?);
    let dashboard = DashboardService::with_sample_data();

    eprintln!("Analyzing dashboard data...");
    let outcome = service.run_or_empty(dashboard.monthly_sales(), dashboard.all_customers()).await;
    if let Some(error) = outcome.error {
        bail!("{error}");
    }
    println!("{}", outcome.analysis.render());
    Ok(())
}
