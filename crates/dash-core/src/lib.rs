//! Core functionality for the admin dashboard platform
//!
//! This crate provides the query model, the pagination-range algorithm and
//! the generic collection controller that every browse panel is built on.

pub mod controller;
pub mod error;
pub mod fetch;
pub mod pagination;
pub mod query;
pub mod subscriber;

// Re-export commonly used types
pub use controller::{CollectionController, CollectionState, LoadStatus, SEARCH_DEBOUNCE};
pub use error::CoreError;
pub use fetch::PageFetcher;
pub use pagination::{pagination_range, PageItem, DEFAULT_SIBLING_COUNT};
pub use query::{PageEnvelope, QueryParams, DEFAULT_PAGE_SIZE};
pub use subscriber::CollectionSubscriber;
