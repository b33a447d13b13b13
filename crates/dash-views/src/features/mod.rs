//! Per-panel view configuration: columns, sort options, badges and copy

use chrono::{DateTime, Utc};

pub mod customers;
pub mod dashboard;
pub mod income;
pub mod products;
pub mod promote;

/// `Jan 5, 2025`
pub(crate) fn format_full_date(date: DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// `Jan 5`
pub(crate) fn format_short_date(date: DateTime<Utc>) -> String {
    date.format("%b %-d").to_string()
}
