//! Static sample datasets served by the dashboard.

use chrono::NaiveDate;

use crate::{CustomerRecord, CustomerStatus, SalesRecord};

/// Monthly sales against target, January through July.
#[must_use]
pub fn monthly_sales() -> Vec<SalesRecord> {
    [
        ("Jan", 4000.0, 2400.0, 2400.0),
        ("Feb", 3000.0, 2500.0, 1800.0),
        ("Mar", 5000.0, 2600.0, 3200.0),
        ("Apr", 2780.0, 2700.0, 1900.0),
        ("May", 1890.0, 2800.0, 1200.0),
        ("Jun", 2390.0, 2900.0, 1700.0),
        ("Jul", 3490.0, 3000.0, 2200.0),
    ]
    .into_iter()
    .map(|(name, sales, target, profit)| SalesRecord::new(name, sales, target).with_profit(profit))
    .collect()
}

/// Sales and site visitors per weekday. Weekly figures carry no target.
#[must_use]
pub fn weekly_sales() -> Vec<SalesRecord> {
    [
        ("Mon", 1200.0, 800),
        ("Tue", 1400.0, 950),
        ("Wed", 1800.0, 1200),
        ("Thu", 1600.0, 1100),
        ("Fri", 2000.0, 1300),
        ("Sat", 1800.0, 1400),
        ("Sun", 1200.0, 900),
    ]
    .into_iter()
    .map(|(name, sales, visitors)| SalesRecord::new(name, sales, 0.0).with_visitors(visitors))
    .collect()
}

/// Recent customer purchases, newest first.
#[must_use]
pub fn customers() -> Vec<CustomerRecord> {
    use CustomerStatus::{Completed, Failed, Pending};

    [
        (1, "John Doe", "john@example.com", 1200.0, 15, Completed),
        (2, "Jane Smith", "jane@example.com", 850.0, 14, Pending),
        (3, "Robert Johnson", "robert@example.com", 2300.0, 13, Completed),
        (4, "Emily Davis", "emily@example.com", 750.0, 12, Failed),
        (5, "Michael Brown", "michael@example.com", 1600.0, 11, Completed),
        (6, "Sarah Wilson", "sarah@example.com", 920.0, 10, Pending),
        (7, "David Taylor", "david@example.com", 3100.0, 9, Completed),
        (8, "Lisa Anderson", "lisa@example.com", 1450.0, 8, Completed),
        (9, "James Martinez", "james@example.com", 680.0, 7, Failed),
        (10, "Jennifer Robinson", "jennifer@example.com", 2100.0, 6, Completed),
    ]
    .into_iter()
    .map(|(id, name, email, amount, day, status)| CustomerRecord {
        id,
        name: name.to_owned(),
        email: email.to_owned(),
        amount,
        date: NaiveDate::from_ymd_opt(2023, 5, day).unwrap_or_default(),
        status,
    })
    .collect()
}
