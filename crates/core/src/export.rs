//! Delimited-text export of the customer table.
//!
//! Field values are written as-is: a value containing the delimiter or a
//! newline is not quoted, so the output is only well-formed CSV for data
//! without those characters.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{CustomerRecord, SalesdashError, DEFAULT_EXPORT_DELIMITER};

/// A column of the customer table that can be exported.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ExportColumn {
    Name,
    Email,
    Amount,
    Date,
    Status,
}

impl ExportColumn {
    /// Canonical column order used for every export.
    pub const ALL: [Self; 5] = [Self::Name, Self::Email, Self::Amount, Self::Date, Self::Status];

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Amount => "Amount",
            Self::Date => "Date",
            Self::Status => "Status",
        }
    }

    fn render(self, record: &CustomerRecord) -> String {
        match self {
            Self::Name => record.name.clone(),
            Self::Email => record.email.clone(),
            Self::Amount => format!("${}", record.amount),
            Self::Date => format_calendar_date(record.date),
            Self::Status => record.status.as_str().to_owned(),
        }
    }
}

impl std::str::FromStr for ExportColumn {
    type Err = SalesdashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "amount" => Ok(Self::Amount),
            "date" => Ok(Self::Date),
            "status" => Ok(Self::Status),
            other => Err(SalesdashError::UnknownVariant {
                field: "column",
                value: other.to_owned(),
            }),
        }
    }
}

/// Parses a comma-separated column list such as `name,amount`.
///
/// # Errors
/// Returns `UnknownVariant` for any name that is not an exportable column and
/// `InvalidInput` when the list names no column at all.
pub fn parse_columns(list: &str) -> Result<Vec<ExportColumn>, SalesdashError> {
    let columns = list
        .split(',')
        .filter(|part| !part.trim().is_empty())
        .map(str::parse)
        .collect::<Result<Vec<ExportColumn>, _>>()?;
    if columns.is_empty() {
        return Err(SalesdashError::InvalidInput(
            "at least one export column must be selected".to_owned(),
        ));
    }
    Ok(columns)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// Enabled columns. Order is irrelevant; output follows `ExportColumn::ALL`.
    pub columns: Vec<ExportColumn>,
    pub delimiter: char,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { columns: ExportColumn::ALL.to_vec(), delimiter: DEFAULT_EXPORT_DELIMITER }
    }
}

impl ExportOptions {
    fn enabled(&self) -> Vec<ExportColumn> {
        ExportColumn::ALL.into_iter().filter(|c| self.columns.contains(c)).collect()
    }
}

/// Renders `records` as a header line followed by one line per record.
#[must_use]
pub fn format_csv<'a, I>(records: I, options: &ExportOptions) -> String
where
    I: IntoIterator<Item = &'a CustomerRecord>,
{
    let columns = options.enabled();
    let delimiter = options.delimiter.to_string();

    let header = columns.iter().map(ExportColumn::label).collect::<Vec<_>>().join(&delimiter);
    let rows = records.into_iter().map(|record| {
        columns.iter().map(|c| c.render(record)).collect::<Vec<_>>().join(&delimiter)
    });

    std::iter::once(header).chain(rows).collect::<Vec<_>>().join("\n")
}

/// Download filename for an export taken on `date`.
#[must_use]
pub fn export_filename(date: NaiveDate) -> String {
    format!("customer_data_{}.csv", date.format("%Y-%m-%d"))
}

/// US calendar rendering, `5/15/2023`.
#[must_use]
pub fn format_calendar_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}
