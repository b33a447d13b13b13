//! Row records and per-feature enumerations
//!
//! Each feature's row is an immutable value with a stable identifier, display
//! fields, a status enumeration and a timestamp used for the default
//! "newest" ordering.

mod customer;
mod dashboard;
mod help;
mod income;
mod product;
mod profile;
mod promote;

pub use customer::{Customer, CustomerSort, CustomerStats, CustomerStatus};
pub use dashboard::{Activity, ActivityKind, DashboardStats};
pub use help::{Faq, HelpCategory};
pub use income::{IncomeStats, Transaction, TransactionKind, TransactionSort, TransactionStatus};
pub use product::{Product, ProductSort, ProductStatus};
pub use profile::{ProfileStats, ProfileUpdate, UserProfile};
pub use promote::{Campaign, CampaignKind, CampaignSort, CampaignStatus};
