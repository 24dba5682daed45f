//! Plain-text summaries of the dashboard datasets, used as prompt context.

use crate::{CustomerRecord, SalesRecord, RECENT_AMOUNTS_PREVIEW};

/// Aggregate figures for a sales series.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesStats {
    pub total_sales: f64,
    pub total_target: f64,
    pub periods: usize,
    pub latest: Option<SalesRecord>,
}

impl SalesStats {
    #[must_use]
    pub fn from_records(records: &[SalesRecord]) -> Self {
        Self {
            total_sales: records.iter().map(|r| r.sales).sum(),
            total_target: records.iter().map(|r| r.target).sum(),
            periods: records.len(),
            latest: records.last().cloned(),
        }
    }
}

/// Aggregate figures for customer purchases.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerStats {
    pub customers: usize,
    pub total_spending: f64,
    /// Zero when there are no customers.
    pub average_spending: f64,
    /// Most recent purchase amounts, newest first.
    pub recent_amounts: Vec<f64>,
}

impl CustomerStats {
    #[must_use]
    pub fn from_records(records: &[CustomerRecord]) -> Self {
        let total_spending: f64 = records.iter().map(|r| r.amount).sum();
        let average_spending =
            if records.is_empty() { 0.0 } else { total_spending / records.len() as f64 };

        let mut by_recency: Vec<&CustomerRecord> = records.iter().collect();
        by_recency.sort_by(|a, b| b.date.cmp(&a.date));
        let recent_amounts =
            by_recency.iter().take(RECENT_AMOUNTS_PREVIEW).map(|r| r.amount).collect();

        Self { customers: records.len(), total_spending, average_spending, recent_amounts }
    }
}

#[must_use]
pub fn summarize_sales(records: &[SalesRecord]) -> String {
    let stats = SalesStats::from_records(records);
    let latest = stats.latest.as_ref().map_or_else(
        || "- Latest Month: N/A".to_owned(),
        |r| {
            format!(
                "- Latest Month ({}): Sales ${}, Target ${}",
                r.name,
                format_grouped(r.sales),
                format_grouped(r.target)
            )
        },
    );
    let by_month =
        records.iter().map(|r| format!("{}: ${}", r.name, r.sales)).collect::<Vec<_>>().join(", ");

    format!(
        "Monthly Sales Data Summary ({} months):\n\
         - Total Sales: ${}\n\
         - Total Target: ${}\n\
         {latest}\n\
         Sales by month: {by_month}",
        stats.periods,
        format_grouped(stats.total_sales),
        format_grouped(stats.total_target),
    )
}

#[must_use]
pub fn summarize_customers(records: &[CustomerRecord]) -> String {
    let stats = CustomerStats::from_records(records);
    let recent =
        stats.recent_amounts.iter().map(|a| format!("${a}")).collect::<Vec<_>>().join(", ");

    format!(
        "Customer Data Summary:\n\
         - Total Customers: {}\n\
         - Total Spending by these customers: ${}\n\
         - Average Spending per customer: ${}\n\
         Recent purchases include amounts like: {recent}",
        stats.customers,
        format_grouped(stats.total_spending),
        format_grouped_fixed(stats.average_spending),
    )
}

/// Thousands-grouped number with up to two decimals, trailing zeros dropped.
#[must_use]
pub fn format_grouped(value: f64) -> String {
    let fixed = format_grouped_fixed(value);
    match fixed.split_once('.') {
        Some((int, frac)) => {
            let frac = frac.trim_end_matches('0');
            if frac.is_empty() { int.to_owned() } else { format!("{int}.{frac}") }
        },
        None => fixed,
    }
}

/// Thousands-grouped number with exactly two decimals.
#[must_use]
pub fn format_grouped_fixed(value: f64) -> String {
    let rendered = format!("{:.2}", value.abs());
    let (int, frac) = rendered.split_once('.').unwrap_or((rendered.as_str(), "00"));

    let mut grouped = String::with_capacity(int.len() + int.len() / 3);
    for (i, ch) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && rendered != "0.00" { "-" } else { "" };
    format!("{sign}{grouped}.{frac}")
}
