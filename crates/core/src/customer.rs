//! Customer purchase records shown in the dashboard table.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::SalesdashError;

/// Outcome of a customer purchase.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CustomerStatus {
    Completed,
    Pending,
    Failed,
}

impl CustomerStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::Pending => "Pending",
            Self::Failed => "Failed",
        }
    }
}

impl std::fmt::Display for CustomerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CustomerStatus {
    type Err = SalesdashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "completed" => Ok(Self::Completed),
            "pending" => Ok(Self::Pending),
            "failed" => Ok(Self::Failed),
            other => Err(SalesdashError::UnknownVariant {
                field: "status",
                value: other.to_owned(),
            }),
        }
    }
}

/// A single customer purchase.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomerRecord {
    /// Stable unique identifier
    pub id: u32,
    pub name: String,
    pub email: String,
    /// Purchase amount in currency units, never negative
    pub amount: f64,
    /// Purchase date, serialized as `YYYY-MM-DD`
    pub date: NaiveDate,
    pub status: CustomerStatus,
}

impl CustomerRecord {
    /// Case-insensitive substring match against name or email.
    ///
    /// `needle_lower` must already be lowercased.
    #[must_use]
    pub fn matches(&self, needle_lower: &str) -> bool {
        needle_lower.is_empty()
            || self.name.to_lowercase().contains(needle_lower)
            || self.email.to_lowercase().contains(needle_lower)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip_through_str() {
        for status in [CustomerStatus::Completed, CustomerStatus::Pending, CustomerStatus::Failed] {
            assert_eq!(status.as_str().parse::<CustomerStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_status_parse_is_case_insensitive() {
        assert_eq!("PENDING".parse::<CustomerStatus>().unwrap(), CustomerStatus::Pending);
    }

    #[test]
    fn test_status_parse_unknown() {
        assert!("refunded".parse::<CustomerStatus>().is_err());
    }

    #[test]
    fn test_record_serializes_date_as_iso() {
        let record = CustomerRecord {
            id: 1,
            name: "John Doe".to_owned(),
            email: "john@example.com".to_owned(),
            amount: 1200.0,
            date: NaiveDate::from_ymd_opt(2023, 5, 15).unwrap(),
            status: CustomerStatus::Completed,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["date"], "2023-05-15");
        assert_eq!(json["status"], "Completed");
    }
}
