//! Query parameters and the page envelope shared by every collection

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Rows per page unless a feature overrides it
pub const DEFAULT_PAGE_SIZE: usize = 8;

/// Parameters for one page request, generic over the feature's sort key.
///
/// Matches the future wire mapping: a GET query string with
/// `page`, `pageSize`, `search` and `sortBy`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParams<S> {
    /// 1-indexed page number
    pub page: usize,

    /// Rows per page
    #[serde(rename = "pageSize")]
    pub page_size: usize,

    /// Optional substring filter
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub search: Option<String>,

    /// Optional sort order; absent means the collection's natural order
    #[serde(rename = "sortBy", skip_serializing_if = "Option::is_none", default)]
    pub sort_by: Option<S>,
}

impl<S> Default for QueryParams<S> {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            search: None,
            sort_by: None,
        }
    }
}

impl<S> QueryParams<S> {
    /// Check the numeric preconditions (`page >= 1`, `page_size >= 1`).
    ///
    /// Out-of-range pages are deliberately not rejected here; they resolve
    /// to an empty slice instead.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.page == 0 {
            return Err(CoreError::InvalidArgument("page must be >= 1".into()));
        }
        if self.page_size == 0 {
            return Err(CoreError::InvalidArgument("pageSize must be >= 1".into()));
        }
        Ok(())
    }

    /// The effective search needle, if any. Whitespace-only search is
    /// equivalent to no filter at all.
    pub fn search_term(&self) -> Option<&str> {
        match self.search.as_deref().map(str::trim) {
            Some("") | None => None,
            Some(term) => Some(term),
        }
    }

    /// Index of the first row on the requested page.
    pub fn offset(&self) -> usize {
        (self.page - 1) * self.page_size
    }
}

/// One page of results plus the counts the pagination control needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageEnvelope<T> {
    /// Rows for this page, at most `page_size` of them, in sort order
    pub data: Vec<T>,

    /// Count of rows matching the filter across all pages
    pub total: usize,

    /// Echo of the requested page
    pub page: usize,

    /// Echo of the requested page size
    #[serde(rename = "pageSize")]
    pub page_size: usize,

    /// `ceil(total / page_size)`, zero when there are no rows
    #[serde(rename = "totalPages")]
    pub total_pages: usize,
}

impl<T> PageEnvelope<T> {
    /// Wrap a fully resolved (filtered + sorted) collection, slicing out the
    /// requested page. `total` becomes the full filtered length.
    pub fn slice(mut rows: Vec<T>, page: usize, page_size: usize) -> Self {
        let total = rows.len();
        let start = (page - 1).saturating_mul(page_size).min(total);
        let end = (start + page_size).min(total);
        rows.truncate(end);
        let data: Vec<T> = rows.drain(start..).collect();
        Self {
            data,
            total,
            page,
            page_size,
            total_pages: total_pages_for(total, page_size),
        }
    }

    /// Wrap rows that were already sliced to the page window, with a total
    /// that is known externally (virtual collections).
    pub fn window(data: Vec<T>, total: usize, page: usize, page_size: usize) -> Self {
        Self {
            data,
            total,
            page,
            page_size,
            total_pages: total_pages_for(total, page_size),
        }
    }
}

/// Page count for a total row count, `0` when the collection is empty.
pub fn total_pages_for(total: usize, page_size: usize) -> usize {
    if total == 0 {
        0
    } else {
        (total + page_size - 1) / page_size
    }
}
