//! Mock data services for the admin dashboard
//!
//! Every "service" here is an in-memory generator with an artificial delay,
//! standing in for a future HTTP backend. Rows are produced deterministically
//! from their index, so the virtual collections never have to be stored.

pub mod engine;
pub mod model;
pub mod rng;
pub mod sources;

use dash_core::CoreError;
use thiserror::Error;

// Re-exports
pub use rng::IndexedRng;
pub use sources::{
    CampaignBook, CustomerDirectory, HelpDesk, Overview, ProductCatalog, ProfileStore,
    TransactionLedger,
};

/// Errors that can occur in the data layer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{0}")]
    Unavailable(String),
}

impl From<DataError> for CoreError {
    fn from(error: DataError) -> Self {
        match error {
            DataError::InvalidArgument(msg) => CoreError::InvalidArgument(msg),
            DataError::Unavailable(msg) => CoreError::FetchFailed(msg),
        }
    }
}

impl From<CoreError> for DataError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::InvalidArgument(msg) => DataError::InvalidArgument(msg),
            CoreError::FetchFailed(msg) => DataError::Unavailable(msg),
        }
    }
}
