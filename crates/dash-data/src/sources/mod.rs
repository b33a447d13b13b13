//! Mock service implementations, one per feature area

pub mod customers;
pub mod dashboard;
pub mod help;
pub mod income;
pub mod products;
pub mod profile;
pub mod promote;

use chrono::{DateTime, TimeZone, Utc};
use once_cell::sync::Lazy;
use std::time::Duration;

pub use customers::{generate_customer, CustomerDirectory, CUSTOMER_POOL_SIZE};
pub use dashboard::Overview;
pub use help::HelpDesk;
pub use income::{generate_transaction, TransactionLedger, TRANSACTION_COUNT};
pub use products::{generate_product, ProductCatalog, PRODUCT_COUNT};
pub use profile::ProfileStore;
pub use promote::{generate_campaign, CampaignBook, CAMPAIGN_COUNT};

/// Simulated network latency applied by every service call
pub const API_DELAY: Duration = Duration::from_millis(300);

/// Fixed instant all generated timestamps hang off. Generation must never
/// read the wall clock or determinism across runs is lost.
pub static REFERENCE_TIME: Lazy<DateTime<Utc>> =
    Lazy::new(|| Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());

pub(crate) async fn simulate_latency(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
