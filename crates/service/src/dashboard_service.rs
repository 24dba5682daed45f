use salesdash_core::{
    format_csv, sample_data, summarize_customers, summarize_sales, CustomerQuery, CustomerRecord,
    ExportOptions, SalesPeriod, SalesRecord,
};
use serde::Serialize;

/// Summary strings sent with analysis requests.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DashboardSummaries {
    pub sales: String,
    pub customers: String,
}

/// Read-only dashboard data: sales series and the customer table.
#[derive(Debug, Clone)]
pub struct DashboardService {
    monthly_sales: Vec<SalesRecord>,
    weekly_sales: Vec<SalesRecord>,
    customers: Vec<CustomerRecord>,
}

impl DashboardService {
    #[must_use]
    pub fn new(
        monthly_sales: Vec<SalesRecord>,
        weekly_sales: Vec<SalesRecord>,
        customers: Vec<CustomerRecord>,
    ) -> Self {
        Self { monthly_sales, weekly_sales, customers }
    }

    #[must_use]
    pub fn with_sample_data() -> Self {
        Self::new(sample_data::monthly_sales(), sample_data::weekly_sales(), sample_data::customers())
    }

    pub fn monthly_sales(&self) -> &[SalesRecord] {
        &self.monthly_sales
    }

    /// The series shown by the sales chart for `period`.
    pub fn sales(&self, period: SalesPeriod) -> &[SalesRecord] {
        match period {
            SalesPeriod::Monthly => &self.monthly_sales,
            SalesPeriod::Weekly => &self.weekly_sales,
        }
    }

    pub fn all_customers(&self) -> &[CustomerRecord] {
        &self.customers
    }

    /// The customer table as currently filtered and sorted.
    pub fn customers(&self, query: &CustomerQuery) -> Vec<&CustomerRecord> {
        query.apply(&self.customers)
    }

    /// Exports exactly the rows [`Self::customers`] returns for `query`.
    pub fn export_csv(&self, query: &CustomerQuery, options: &ExportOptions) -> String {
        let rows = self.customers(query);
        tracing::debug!(rows = rows.len(), columns = options.columns.len(), "exporting customers");
        format_csv(rows, options)
    }

    pub fn summaries(&self) -> DashboardSummaries {
        DashboardSummaries {
            sales: summarize_sales(&self.monthly_sales),
            customers: summarize_customers(&self.customers),
        }
    }
}
