use salesdash_core::{
    summarize_customers, summarize_sales, AnalysisKind, CustomerAnalysis, CustomerRecord,
    DashboardAnalysis, SalesAnalysis, SalesRecord,
};
use salesdash_llm::GatewayClient;

use crate::ServiceError;

/// Result of a combined analysis as the dashboard shows it: on failure the
/// empty analysis plus the error message.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisOutcome {
    pub analysis: DashboardAnalysis,
    pub error: Option<String>,
}

/// Runs the sales and customer analyses through the ask gateway.
#[derive(Debug, Clone)]
pub struct AnalysisService {
    gateway: GatewayClient,
}

impl AnalysisService {
    #[must_use]
    pub fn new(gateway: GatewayClient) -> Self {
        Self { gateway }
    }

    /// Issues both analyses concurrently and waits for both.
    ///
    /// All or nothing: if either request fails the other result is dropped.
    /// When both fail the sales error is reported.
    ///
    /// # Errors
    /// The first failing analysis, as a `Gateway` error.
    pub async fn run(
        &self,
        sales: &[SalesRecord],
        customers: &[CustomerRecord],
    ) -> Result<DashboardAnalysis, ServiceError> {
        let sales_summary = summarize_sales(sales);
        let customer_summary = summarize_customers(customers);

        tracing::info!("requesting combined analysis");
        let (sales_result, customer_result) = tokio::join!(
            self.gateway.analyze(AnalysisKind::CombinedSales, &sales_summary),
            self.gateway.analyze(AnalysisKind::CombinedCustomer, &customer_summary),
        );

        let sales_value = sales_result?;
        let customer_value = customer_result?;
        Ok(DashboardAnalysis {
            sales: SalesAnalysis::from_value(&sales_value),
            customers: CustomerAnalysis::from_value(&customer_value),
        })
    }

    /// Like [`Self::run`] but never fails; errors become the empty analysis.
    pub async fn run_or_empty(
        &self,
        sales: &[SalesRecord],
        customers: &[CustomerRecord],
    ) -> AnalysisOutcome {
        match self.run(sales, customers).await {
            Ok(analysis) => AnalysisOutcome { analysis, error: None },
            Err(e) => {
                tracing::warn!(error = %e, "combined analysis failed");
                AnalysisOutcome { analysis: DashboardAnalysis::default(), error: Some(e.to_string()) }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use salesdash_core::sample_data;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const ASK_PATH: &str = "/api/askGemini";

    fn service_for(server: &MockServer) -> AnalysisService {
        AnalysisService::new(GatewayClient::new(format!("{}{ASK_PATH}", server.uri())).unwrap())
    }

    async fn mount_kind(server: &MockServer, kind: AnalysisKind, response: ResponseTemplate) {
        Mock::given(method("POST"))
            .and(path(ASK_PATH))
            .and(body_partial_json(json!({ "userInput": kind.instructions() })))
            .respond_with(response)
            .mount(server)
            .await;
    }

    fn answer(text: &str) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(json!({ "answer": text }))
    }

    #[tokio::test]
    async fn test_combined_analysis_success() {
        let server = MockServer::start().await;
        mount_kind(
            &server,
            AnalysisKind::CombinedSales,
            answer("```json\n{\"performance\":{\"status\":\"Good\"},\"recommendations\":[\"Grow\"],\"forecast\":4000,\"alerts\":[]}\n```"),
        )
        .await;
        mount_kind(
            &server,
            AnalysisKind::CombinedCustomer,
            answer("{\"insights\":{\"averageSpending\":1495},\"recommendations\":[]}"),
        )
        .await;

        let analysis = service_for(&server)
            .run(&sample_data::monthly_sales(), &sample_data::customers())
            .await
            .unwrap();
        assert_eq!(analysis.sales.performance.as_ref().and_then(|p| p.status.as_deref()), Some("Good"));
        assert_eq!(analysis.sales.forecast, Some(4000.0));
        assert_eq!(
            analysis.customers.insights.as_ref().and_then(|i| i.average_spending),
            Some(1495.0)
        );
        assert!(analysis.customers.recommendations.is_empty());
    }

    #[tokio::test]
    async fn test_one_failure_discards_both() {
        let server = MockServer::start().await;
        mount_kind(&server, AnalysisKind::CombinedSales, answer("{\"recommendations\":[\"x\"]}"))
            .await;
        mount_kind(
            &server,
            AnalysisKind::CombinedCustomer,
            ResponseTemplate::new(500)
                .set_body_json(json!({ "error": "Failed to process request with AI", "details": "quota" })),
        )
        .await;

        let outcome = service_for(&server)
            .run_or_empty(&sample_data::monthly_sales(), &sample_data::customers())
            .await;
        assert_eq!(outcome.analysis, DashboardAnalysis::default());
        assert_eq!(outcome.error.as_deref(), Some("quota"));
    }

    #[tokio::test]
    async fn test_malformed_answer_fails() {
        let server = MockServer::start().await;
        mount_kind(&server, AnalysisKind::CombinedSales, answer("not json at all")).await;
        mount_kind(&server, AnalysisKind::CombinedCustomer, answer("{}")).await;

        let err = service_for(&server)
            .run(&sample_data::monthly_sales(), &sample_data::customers())
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Gateway(_)));
    }
}
