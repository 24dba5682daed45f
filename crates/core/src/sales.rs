use serde::{Deserialize, Serialize};

use crate::SalesdashError;

/// Sales figures for one period (a month or a weekday).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SalesRecord {
    /// Period label, e.g. `Jan` or `Mon`
    pub name: String,
    pub sales: f64,
    pub target: f64,
    /// Monthly series only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profit: Option<f64>,
    /// Weekly series only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visitors: Option<u32>,
}

impl SalesRecord {
    #[must_use]
    pub fn new(name: &str, sales: f64, target: f64) -> Self {
        Self { name: name.to_owned(), sales, target, profit: None, visitors: None }
    }

    #[must_use]
    pub fn with_profit(mut self, profit: f64) -> Self {
        self.profit = Some(profit);
        self
    }

    #[must_use]
    pub fn with_visitors(mut self, visitors: u32) -> Self {
        self.visitors = Some(visitors);
        self
    }
}

/// Which sales series the chart shows.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum SalesPeriod {
    #[default]
    Monthly,
    Weekly,
}

impl SalesPeriod {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Weekly => "weekly",
        }
    }
}

impl std::fmt::Display for SalesPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SalesPeriod {
    type Err = SalesdashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monthly" => Ok(Self::Monthly),
            "weekly" => Ok(Self::Weekly),
            other => Err(SalesdashError::UnknownVariant { field: "period", value: other.to_owned() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_parse() {
        assert_eq!("Weekly".parse::<SalesPeriod>().unwrap(), SalesPeriod::Weekly);
        assert_eq!(" monthly ".parse::<SalesPeriod>().unwrap(), SalesPeriod::Monthly);
        assert!("daily".parse::<SalesPeriod>().is_err());
    }

    #[test]
    fn test_optional_fields_are_omitted() {
        let record = SalesRecord::new("Mon", 1200.0, 0.0).with_visitors(800);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["visitors"], 800);
        assert!(json.get("profit").is_none());
    }
}
