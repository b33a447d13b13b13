//! The fetch capability a collection controller is parameterized over

use async_trait::async_trait;

use crate::error::CoreError;
use crate::query::{PageEnvelope, QueryParams};

/// Anything that can resolve one page of a collection.
///
/// Mock services implement this today; a real HTTP client would implement
/// the same contract against `GET ?page&pageSize&search&sortBy`.
#[async_trait]
pub trait PageFetcher<T>: Send + Sync {
    /// The feature's sort key enumeration
    type Sort: Copy + Send + Sync + 'static;

    /// Resolve one page for the given parameters.
    async fn fetch_page(
        &self,
        params: QueryParams<Self::Sort>,
    ) -> Result<PageEnvelope<T>, CoreError>;
}
