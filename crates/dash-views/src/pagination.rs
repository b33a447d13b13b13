//! Pagination control and the entries-range footer

use dash_core::{pagination_range, PageItem, DEFAULT_SIBLING_COUNT};

/// One rendered slot of the pagination strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSlot {
    Page { number: usize, active: bool },
    Ellipsis,
}

/// The pagination strip for one panel. `build` returns `None` when there
/// is a single page or less; the strip is simply not rendered then.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationControl {
    pub slots: Vec<PageSlot>,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

impl PaginationControl {
    pub fn build(current_page: usize, total_pages: usize) -> Option<Self> {
        Self::with_siblings(current_page, total_pages, DEFAULT_SIBLING_COUNT)
    }

    pub fn with_siblings(
        current_page: usize,
        total_pages: usize,
        siblings: usize,
    ) -> Option<Self> {
        if total_pages <= 1 {
            return None;
        }
        let slots = pagination_range(current_page, total_pages, siblings)
            .into_iter()
            .map(|item| match item {
                PageItem::Page(number) => PageSlot::Page {
                    number,
                    active: number == current_page,
                },
                PageItem::Ellipsis => PageSlot::Ellipsis,
            })
            .collect();
        Some(Self {
            slots,
            prev_enabled: current_page > 1,
            next_enabled: current_page < total_pages,
        })
    }

    /// The page a "previous" press navigates to, if enabled.
    pub fn prev_target(&self, current_page: usize) -> Option<usize> {
        self.prev_enabled.then(|| current_page - 1)
    }

    /// The page a "next" press navigates to, if enabled.
    pub fn next_target(&self, current_page: usize) -> Option<usize> {
        self.next_enabled.then(|| current_page + 1)
    }
}

/// "Showing data X to Y of Z entries" for the table footer. An empty page
/// window (zero total, or a page past the end) reads "0 to 0".
pub fn entries_summary(page: usize, page_size: usize, total: usize) -> String {
    let offset = (page - 1) * page_size;
    if offset >= total {
        return format!("Showing data 0 to 0 of {total} entries");
    }
    let start = offset + 1;
    let end = (offset + page_size).min(total);
    format!("Showing data {start} to {end} of {total} entries")
}
