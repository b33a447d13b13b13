use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Headline numbers for the dashboard overview
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_revenue: i64,
    pub revenue_trend: f64,
    pub total_orders: i64,
    pub orders_trend: f64,
    pub total_customers: i64,
    pub customers_trend: f64,
    pub conversion_rate: f64,
    pub conversion_trend: f64,
}

/// One entry of the recent-activity feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Order,
    Customer,
    Product,
    Payment,
}
