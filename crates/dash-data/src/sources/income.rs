//! Transaction ledger: a bounded collection of 300 rows plus income stats

use std::cmp::Ordering;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Duration as ChronoDuration;
use dash_core::{CoreError, PageEnvelope, PageFetcher, QueryParams};

use super::{simulate_latency, REFERENCE_TIME};
use crate::engine;
use crate::model::{IncomeStats, Transaction, TransactionKind, TransactionSort, TransactionStatus};
use crate::rng::IndexedRng;
use crate::DataError;

/// Size of the generated ledger
pub const TRANSACTION_COUNT: usize = 300;

const CUSTOMER_NAMES: [&str; 10] = [
    "John Doe",
    "Sarah Wilson",
    "Mike Johnson",
    "Emily Brown",
    "David Lee",
    "Lisa Anderson",
    "James Taylor",
    "Jennifer Martinez",
    "Robert Garcia",
    "Maria Rodriguez",
];

const DESCRIPTIONS: [&str; 8] = [
    "Product purchase",
    "Subscription renewal",
    "Service fee",
    "Premium upgrade",
    "Bulk order",
    "Consultation fee",
    "Monthly plan",
    "Annual subscription",
];

// Weighted: sales dominate.
const KINDS: [TransactionKind; 6] = [
    TransactionKind::Sale,
    TransactionKind::Sale,
    TransactionKind::Sale,
    TransactionKind::Subscription,
    TransactionKind::Refund,
    TransactionKind::Fee,
];

// Weighted: most transactions settle.
const STATUSES: [TransactionStatus; 5] = [
    TransactionStatus::Completed,
    TransactionStatus::Completed,
    TransactionStatus::Completed,
    TransactionStatus::Pending,
    TransactionStatus::Failed,
];

/// Materialize ledger row `index`. Draw order is fixed: kind, age,
/// description, amount, status, customer.
pub fn generate_transaction(index: usize) -> Transaction {
    let mut rng = IndexedRng::for_index(index);

    let kind = *rng.pick(&KINDS);
    let age = rng.in_range(0, 90 * 24 * 3600);
    let description = *rng.pick(&DESCRIPTIONS);
    let amount = match kind {
        TransactionKind::Refund => -(rng.in_range(20, 220)),
        _ => rng.in_range(50, 2050),
    };
    let status = *rng.pick(&STATUSES);
    let customer = *rng.pick(&CUSTOMER_NAMES);

    Transaction {
        id: format!("txn_{index:06}"),
        date: *REFERENCE_TIME - ChronoDuration::seconds(age),
        description: description.to_string(),
        amount,
        kind,
        status,
        customer: customer.to_string(),
    }
}

fn compare(sort: Option<TransactionSort>, a: &Transaction, b: &Transaction) -> Ordering {
    match sort {
        // Magnitude, largest first; refunds count by their absolute value.
        Some(TransactionSort::Amount) => b.amount.abs().cmp(&a.amount.abs()),
        Some(TransactionSort::Status) => a.status.sort_rank().cmp(&b.status.sort_rank()),
        Some(TransactionSort::Newest) => b.date.cmp(&a.date),
        None => Ordering::Equal,
    }
}

/// Mock income service over the generated ledger
pub struct TransactionLedger {
    transactions: Vec<Transaction>,
    delay: Duration,
}

impl TransactionLedger {
    pub fn new(delay: Duration) -> Self {
        Self {
            transactions: (0..TRANSACTION_COUNT).map(generate_transaction).collect(),
            delay,
        }
    }

    /// Resolve one page of transactions. Search matches description or
    /// customer name.
    pub async fn transactions(
        &self,
        params: &QueryParams<TransactionSort>,
    ) -> Result<PageEnvelope<Transaction>, DataError> {
        simulate_latency(self.delay).await;
        let sort = params.sort_by;
        engine::resolve_page(
            &self.transactions,
            params,
            |txn, needle| {
                txn.description.to_lowercase().contains(needle)
                    || txn.customer.to_lowercase().contains(needle)
            },
            move |a, b| compare(sort, a, b),
        )
    }

    pub async fn stats(&self) -> Result<IncomeStats, DataError> {
        simulate_latency(self.delay).await;
        Ok(IncomeStats {
            total_revenue: 847_293,
            revenue_trend: 14.2,
            pending_payments: 23_450,
            pending_trend: -5.3,
            completed_transactions: 1_247,
            completed_trend: 8.7,
        })
    }
}

#[async_trait]
impl PageFetcher<Transaction> for TransactionLedger {
    type Sort = TransactionSort;

    async fn fetch_page(
        &self,
        params: QueryParams<TransactionSort>,
    ) -> Result<PageEnvelope<Transaction>, CoreError> {
        self.transactions(&params).await.map_err(Into::into)
    }
}
