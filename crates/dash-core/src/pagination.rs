//! Windowed pagination-range computation
//!
//! Maps (current page, total pages, sibling count) to the compact sequence
//! of page buttons and ellipsis markers the pagination control renders,
//! keeping the control's width bounded regardless of how many pages exist.

/// Page buttons shown on each side of the current page before collapsing
pub const DEFAULT_SIBLING_COUNT: usize = 1;

/// One entry in the rendered pagination strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    /// A concrete page button (1-indexed)
    Page(usize),
    /// A collapsed gap between the window and a boundary page
    Ellipsis,
}

/// Compute the page markers to render.
///
/// Returns an empty sequence for zero or one pages; the control is not
/// rendered at all in that case.
pub fn pagination_range(
    current_page: usize,
    total_pages: usize,
    sibling_count: usize,
) -> Vec<PageItem> {
    if total_pages <= 1 {
        return Vec::new();
    }

    // siblings + first + last + current + 2 ellipsis
    let total_buttons = sibling_count * 2 + 5;
    if total_pages <= total_buttons - 2 {
        return pages(1, total_pages).collect();
    }

    let left_sibling = current_page.saturating_sub(sibling_count).max(1);
    let right_sibling = (current_page + sibling_count).min(total_pages);

    let show_left_ellipsis = left_sibling > 2;
    let show_right_ellipsis = right_sibling < total_pages - 1;

    if !show_left_ellipsis && show_right_ellipsis {
        // Window hugs the start; widen it to keep the button count stable.
        let left_item_count = 3 + 2 * sibling_count;
        let mut range: Vec<PageItem> = pages(1, left_item_count).collect();
        range.push(PageItem::Ellipsis);
        range.push(PageItem::Page(total_pages));
        return range;
    }

    if show_left_ellipsis && !show_right_ellipsis {
        let right_item_count = 3 + 2 * sibling_count;
        let mut range = vec![PageItem::Page(1), PageItem::Ellipsis];
        range.extend(pages(total_pages - right_item_count + 1, total_pages));
        return range;
    }

    let mut range = vec![PageItem::Page(1), PageItem::Ellipsis];
    range.extend(pages(left_sibling, right_sibling));
    range.push(PageItem::Ellipsis);
    range.push(PageItem::Page(total_pages));
    range
}

fn pages(start: usize, end: usize) -> impl Iterator<Item = PageItem> {
    (start..=end).map(PageItem::Page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageItem::{Ellipsis, Page};

    #[test]
    fn test_small_range_has_no_ellipsis() {
        assert_eq!(
            pagination_range(1, 5, 1),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5)]
        );
    }

    #[test]
    fn test_middle_of_large_range() {
        assert_eq!(
            pagination_range(5, 10, 1),
            vec![
                Page(1),
                Ellipsis,
                Page(4),
                Page(5),
                Page(6),
                Ellipsis,
                Page(10)
            ]
        );
    }

    #[test]
    fn test_at_start_of_large_range() {
        let range = pagination_range(1, 10, 1);
        // no left ellipsis, a widened leading window, one right ellipsis
        assert_eq!(
            range,
            vec![
                Page(1),
                Page(2),
                Page(3),
                Page(4),
                Page(5),
                Ellipsis,
                Page(10)
            ]
        );
    }

    #[test]
    fn test_at_end_of_large_range() {
        let range = pagination_range(10, 10, 1);
        assert_eq!(
            range,
            vec![
                Page(1),
                Ellipsis,
                Page(6),
                Page(7),
                Page(8),
                Page(9),
                Page(10)
            ]
        );
    }

    #[test]
    fn test_degenerate_ranges_render_nothing() {
        assert!(pagination_range(1, 1, 1).is_empty());
        assert!(pagination_range(1, 0, 1).is_empty());
        assert!(pagination_range(1, 1, 3).is_empty());
    }

    #[test]
    fn test_wider_sibling_count() {
        assert_eq!(
            pagination_range(10, 20, 2),
            vec![
                Page(1),
                Ellipsis,
                Page(8),
                Page(9),
                Page(10),
                Page(11),
                Page(12),
                Ellipsis,
                Page(20)
            ]
        );
    }
}
