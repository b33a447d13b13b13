//! Query resolution for fully materialized collections
//!
//! The bounded-collection path: filter with a case-insensitive substring
//! match, sort with the feature's comparator, then slice the requested page.
//! `total` always counts every row that survived the filter, not just the
//! returned page.

use std::cmp::Ordering;

use dash_core::{PageEnvelope, QueryParams};

use crate::DataError;

/// Resolve one page of a bounded collection.
///
/// `matches` receives the row and the already-lowercased needle; `compare`
/// is applied with a stable sort, so an always-equal comparator leaves the
/// input order unchanged (the "no sort key" case).
pub fn resolve_page<T, S>(
    rows: &[T],
    params: &QueryParams<S>,
    matches: impl Fn(&T, &str) -> bool,
    compare: impl Fn(&T, &T) -> Ordering,
) -> Result<PageEnvelope<T>, DataError>
where
    T: Clone,
{
    params.validate()?;

    let mut filtered: Vec<T> = match params.search_term() {
        Some(term) => {
            let needle = term.to_lowercase();
            rows.iter().filter(|row| matches(row, &needle)).cloned().collect()
        }
        None => rows.to_vec(),
    };

    filtered.sort_by(|a, b| compare(a, b));

    Ok(PageEnvelope::slice(filtered, params.page, params.page_size))
}

/// Case-insensitive string ordering, ascending. Stands in for locale-aware
/// collation; code-point order after lowercasing is close enough for the
/// generated pools.
pub fn cmp_ci(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Descending float ordering that treats incomparable values as equal.
pub fn cmp_f64_desc(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(page: usize, search: Option<&str>) -> QueryParams<()> {
        QueryParams {
            page,
            page_size: 3,
            search: search.map(str::to_string),
            sort_by: None,
        }
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let rows = vec!["Alpha", "beta", "ALPHABET", "gamma"];
        let env = resolve_page(
            &rows,
            &params(1, Some("alpha")),
            |row, needle| row.to_lowercase().contains(needle),
            |_, _| Ordering::Equal,
        )
        .unwrap();
        assert_eq!(env.data, vec!["Alpha", "ALPHABET"]);
        assert_eq!(env.total, 2);
    }

    #[test]
    fn test_stable_sort_keeps_input_order_without_key() {
        let rows = vec!["c", "a", "b"];
        let env = resolve_page(
            &rows,
            &params(1, None),
            |_, _| true,
            |_, _| Ordering::Equal,
        )
        .unwrap();
        assert_eq!(env.data, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_invalid_page_rejected() {
        let rows: Vec<&str> = Vec::new();
        let err = resolve_page(&rows, &params(0, None), |_, _| true, |_, _| Ordering::Equal);
        assert!(matches!(err, Err(DataError::InvalidArgument(_))));
    }
}
