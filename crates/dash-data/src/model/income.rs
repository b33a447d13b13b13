use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of the transaction ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Stable identifier, `txn_{index:06}`
    pub id: String,
    pub date: DateTime<Utc>,
    pub description: String,
    /// Negative for refunds
    pub amount: i64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub status: TransactionStatus,
    pub customer: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Sale,
    Refund,
    Subscription,
    Fee,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Sale => "sale",
            TransactionKind::Refund => "refund",
            TransactionKind::Subscription => "subscription",
            TransactionKind::Fee => "fee",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Completed,
    Pending,
    Failed,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Completed => "completed",
            TransactionStatus::Pending => "pending",
            TransactionStatus::Failed => "failed",
        }
    }

    /// Settled transactions sort ahead of problematic ones.
    pub fn sort_rank(&self) -> u8 {
        match self {
            TransactionStatus::Completed => 0,
            TransactionStatus::Failed => 1,
            TransactionStatus::Pending => 2,
        }
    }
}

/// Sort orders the income panel offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionSort {
    Newest,
    Amount,
    Status,
}

/// Headline numbers for the income stats strip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeStats {
    pub total_revenue: i64,
    pub revenue_trend: f64,
    pub pending_payments: i64,
    pub pending_trend: f64,
    pub completed_transactions: i64,
    pub completed_trend: f64,
}
