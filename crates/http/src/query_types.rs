//! Request/query types (Deserialize)

use salesdash_core::{
    parse_columns, CustomerQuery, ExportColumn, ExportOptions, FaqInput, SalesPeriod,
    SalesdashError, SortDirection, SortKey, SortState, DEFAULT_EXPORT_DELIMITER,
};
use serde::Deserialize;

/// Query string of `GET /api/sales`.
#[derive(Debug, Default, Deserialize)]
pub struct SalesQuery {
    pub period: Option<String>,
}

impl SalesQuery {
    pub fn to_period(&self) -> Result<SalesPeriod, SalesdashError> {
        self.period.as_deref().map_or(Ok(SalesPeriod::default()), str::parse)
    }
}

/// Query string of `GET /api/customers`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerListQuery {
    #[serde(default)]
    pub search: String,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

impl CustomerListQuery {
    pub fn to_query(&self) -> Result<CustomerQuery, SalesdashError> {
        customer_query(&self.search, self.sort_by.as_deref(), self.sort_order.as_deref())
    }
}

/// Query string of `GET /api/customers/export`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportQuery {
    #[serde(default)]
    pub search: String,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    /// Comma-separated column names; all columns when absent.
    pub columns: Option<String>,
    pub delimiter: Option<String>,
}

impl ExportQuery {
    pub fn to_query(&self) -> Result<CustomerQuery, SalesdashError> {
        customer_query(&self.search, self.sort_by.as_deref(), self.sort_order.as_deref())
    }

    pub fn to_options(&self) -> Result<ExportOptions, SalesdashError> {
        let columns = match self.columns.as_deref() {
            Some(list) => parse_columns(list)?,
            None => ExportColumn::ALL.to_vec(),
        };
        let delimiter = match self.delimiter.as_deref() {
            None | Some("") => DEFAULT_EXPORT_DELIMITER,
            Some(raw) => single_char(raw)?,
        };
        Ok(ExportOptions { columns, delimiter })
    }
}

fn single_char(raw: &str) -> Result<char, SalesdashError> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(SalesdashError::InvalidInput(format!(
            "delimiter must be a single character, got {raw:?}"
        ))),
    }
}

/// Missing sort fields fall back to the default state field by field.
fn customer_query(
    search: &str,
    sort_by: Option<&str>,
    sort_order: Option<&str>,
) -> Result<CustomerQuery, SalesdashError> {
    let default = SortState::default();
    let key = sort_by.map(str::parse::<SortKey>).transpose()?.unwrap_or(default.key);
    let direction =
        sort_order.map(str::parse::<SortDirection>).transpose()?.unwrap_or(default.direction);
    Ok(CustomerQuery::new(search, SortState::new(key, direction)))
}

/// Body of FAQ create and edit. Missing fields count as blank.
#[derive(Debug, Default, Deserialize)]
pub struct FaqRequest {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
}

impl From<FaqRequest> for FaqInput {
    fn from(req: FaqRequest) -> Self {
        Self::new(req.question, req.answer)
    }
}
