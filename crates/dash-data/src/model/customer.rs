use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of the customer directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Stable identifier, `cust-{index}`
    pub id: String,
    pub name: String,
    pub company: String,
    pub phone: String,
    pub email: String,
    pub country: String,
    pub status: CustomerStatus,
    pub created_at: DateTime<Utc>,
}

/// Membership status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerStatus {
    Active,
    Inactive,
}

impl CustomerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CustomerStatus::Active => "active",
            CustomerStatus::Inactive => "inactive",
        }
    }

    /// Active memberships sort ahead of lapsed ones.
    pub fn sort_rank(&self) -> u8 {
        match self {
            CustomerStatus::Active => 0,
            CustomerStatus::Inactive => 1,
        }
    }
}

/// Sort orders the customers panel offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerSort {
    Newest,
    Name,
    Status,
}

/// Headline numbers for the customers stats strip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerStats {
    pub total_customers: i64,
    pub total_customers_trend: f64,
    pub members: i64,
    pub members_trend: f64,
    pub active_now: i64,
}
