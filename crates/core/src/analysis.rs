//! Analysis request kinds and the typed view of the model's answers.
//!
//! The model's JSON is never trusted to match the requested shape. Each field
//! is read individually and falls back to an empty value when absent or of
//! the wrong type.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{format_grouped, format_grouped_fixed, SalesdashError};

const SALES_ANALYSIS_INSTRUCTIONS: &str = r#"Based on the provided sales data summary, perform a comprehensive analysis.
Respond ONLY with a valid JSON object containing the following keys:
1. "performance": An object with "status" (string, e.g., "Good", "Moderate", "Bad") and "explanation" (string).
2. "recommendations": An array of 2-3 string recommendations.
3. "forecast": A number representing the sales forecast for the next period.
4. "alerts": An array of alert objects (each with "type" (string) and "message" (string)). If no alerts, this should be an empty array.

Example:
{
  "performance": {"status": "Good", "explanation": "Sales are exceeding targets."},
  "recommendations": ["Increase marketing for Product X", "Offer a discount on Product Y"],
  "forecast": 4590,
  "alerts": []
}"#;

const CUSTOMER_ANALYSIS_INSTRUCTIONS: &str = r#"Based on the provided customer data summary, perform a comprehensive analysis.
Respond ONLY with a valid JSON object containing the following keys:
1. "insights": An object with "averageSpending" (number), "highValueCustomersCount" (number), and "lowValueCustomersCount" (number).
2. "recommendations": An array of 1-2 string recommendations for customer engagement.

Example:
{
  "insights": {"averageSpending": 1500.75, "highValueCustomersCount": 3, "lowValueCustomersCount": 2},
  "recommendations": ["Launch loyalty program", "Targeted email campaign for low spenders"]
}"#;

/// Kind of analysis the dashboard asks the model for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AnalysisKind {
    #[serde(rename = "combinedSalesAnalysis")]
    CombinedSales,
    #[serde(rename = "combinedCustomerAnalysis")]
    CombinedCustomer,
}

impl AnalysisKind {
    pub const ALL: [Self; 2] = [Self::CombinedSales, Self::CombinedCustomer];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CombinedSales => "combinedSalesAnalysis",
            Self::CombinedCustomer => "combinedCustomerAnalysis",
        }
    }

    /// Fixed instructions describing the JSON shape the model must return.
    pub const fn instructions(&self) -> &'static str {
        match self {
            Self::CombinedSales => SALES_ANALYSIS_INSTRUCTIONS,
            Self::CombinedCustomer => CUSTOMER_ANALYSIS_INSTRUCTIONS,
        }
    }
}

impl std::fmt::Display for AnalysisKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AnalysisKind {
    type Err = SalesdashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == s).ok_or_else(|| {
            SalesdashError::UnknownVariant { field: "analysis kind", value: s.to_owned() }
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Performance {
    pub status: Option<String>,
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct Alert {
    #[serde(rename = "type")]
    pub alert_type: String,
    pub message: String,
}

/// Sales analysis with every field defaulted.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct SalesAnalysis {
    pub performance: Option<Performance>,
    pub recommendations: Vec<String>,
    pub forecast: Option<f64>,
    pub alerts: Vec<Alert>,
}

impl SalesAnalysis {
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let performance = value.get("performance").filter(|p| p.is_object()).map(|p| {
            Performance {
                status: string_field(p, "status"),
                explanation: string_field(p, "explanation"),
            }
        });
        let alerts = value
            .get("alerts")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter(|item| item.is_object())
                    .map(|item| Alert {
                        alert_type: string_field(item, "type").unwrap_or_default(),
                        message: string_field(item, "message").unwrap_or_default(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            performance,
            recommendations: string_list(value, "recommendations"),
            forecast: value.get("forecast").and_then(Value::as_f64),
            alerts,
        }
    }

    #[must_use]
    pub fn render(&self) -> String {
        let status = self.performance.as_ref().and_then(|p| p.status.as_deref()).unwrap_or("N/A");
        let explanation = self
            .performance
            .as_ref()
            .and_then(|p| p.explanation.as_deref())
            .unwrap_or("No explanation available.");
        let forecast = self.forecast.map_or_else(|| "N/A".to_owned(), format_grouped);

        let mut out = String::from("AI-Powered Sales Analysis\n");
        out.push_str("Sales Performance\n");
        out.push_str(&format!("  Status: {status}\n"));
        out.push_str(&format!("  Explanation: {explanation}\n"));
        out.push_str("Trend Analysis and Forecasting\n");
        out.push_str(&format!("  Based on AI analysis, we forecast sales of {forecast} next month.\n"));
        out.push_str("Smart Recommendations\n");
        push_list(&mut out, &self.recommendations, "No recommendations available.");

        if !self.alerts.is_empty() {
            out.push_str("AI-Generated Alerts\n");
            for alert in &self.alerts {
                out.push_str(&format!("  ! {}: {}\n", alert.alert_type, alert.message));
            }
        }
        out
    }
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct CustomerInsights {
    pub average_spending: Option<f64>,
    pub high_value_customers_count: Option<u64>,
    pub low_value_customers_count: Option<u64>,
}

/// Customer analysis with every field defaulted.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct CustomerAnalysis {
    pub insights: Option<CustomerInsights>,
    pub recommendations: Vec<String>,
}

impl CustomerAnalysis {
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let insights = value.get("insights").filter(|i| i.is_object()).map(|i| CustomerInsights {
            average_spending: i.get("averageSpending").and_then(Value::as_f64),
            high_value_customers_count: count_field(i, "highValueCustomersCount"),
            low_value_customers_count: count_field(i, "lowValueCustomersCount"),
        });
        Self { insights, recommendations: string_list(value, "recommendations") }
    }

    #[must_use]
    pub fn render(&self) -> String {
        let insights = self.insights.clone().unwrap_or_default();
        let average = insights
            .average_spending
            .map_or_else(|| "N/A".to_owned(), |a| format!("${}", format_grouped_fixed(a)));
        let count = |c: Option<u64>| c.map_or_else(|| "N/A".to_owned(), |n| n.to_string());

        let mut out = String::from("AI-Powered Customer Insights\n");
        out.push_str("Customer Behavior Analysis\n");
        out.push_str(&format!("  Average Spending: {average}\n"));
        out.push_str(&format!(
            "  High-Value Customers: {}\n",
            count(insights.high_value_customers_count)
        ));
        out.push_str(&format!("  Low-Value Customers: {}\n", count(insights.low_value_customers_count)));
        out.push_str("Customer Recommendations\n");
        push_list(&mut out, &self.recommendations, "No customer recommendations available.");
        out
    }
}

/// Both analyses shown on the dashboard. `Default` is the empty state shown
/// after a failure.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct DashboardAnalysis {
    pub sales: SalesAnalysis,
    pub customers: CustomerAnalysis,
}

impl DashboardAnalysis {
    #[must_use]
    pub fn render(&self) -> String {
        format!("{}\n{}", self.sales.render(), self.customers.render())
    }
}

/// Non-empty string at `key`; an empty string counts as missing.
fn string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).filter(|s| !s.is_empty()).map(ToOwned::to_owned)
}

/// Non-negative whole number at `key`, written either as `3` or `3.0`.
fn count_field(value: &Value, key: &str) -> Option<u64> {
    let field = value.get(key)?;
    field.as_u64().or_else(|| {
        field
            .as_f64()
            .filter(|n| n.fract() == 0.0 && *n >= 0.0 && *n <= u64::MAX as f64)
            .map(|n| n as u64)
    })
}

fn string_list(value: &Value, key: &str) -> Vec<String> {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(Value::as_str).map(ToOwned::to_owned).collect())
        .unwrap_or_default()
}

fn push_list(out: &mut String, items: &[String], empty: &str) {
    if items.is_empty() {
        out.push_str(&format!("  {empty}\n"));
    }
    for item in items {
        out.push_str(&format!("  - {item}\n"));
    }
}
