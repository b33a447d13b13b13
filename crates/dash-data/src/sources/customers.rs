//! Customer directory: the virtual large collection
//!
//! Nominally 256 000 rows, never materialized. Rows are generated on demand
//! from their index; the unfiltered path only ever touches the indices of
//! the requested page.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Duration as ChronoDuration;
use dash_core::{CoreError, PageEnvelope, PageFetcher, QueryParams};
use tracing::debug;

use super::{simulate_latency, REFERENCE_TIME};
use crate::model::{Customer, CustomerSort, CustomerStats, CustomerStatus};
use crate::rng::IndexedRng;
use crate::DataError;

/// Nominal size of the virtual directory
pub const CUSTOMER_POOL_SIZE: usize = 256_000;

/// How far into the index space a search will scan
const SEARCH_SCAN_LIMIT: usize = 10_000;

/// Upper bound on matches collected by one search
const SEARCH_MATCH_CAP: usize = 1_000;

const FIRST_NAMES: [&str; 24] = [
    "Jane", "Floyd", "Ronald", "Marvin", "Jerome", "Kathryn", "Jacob", "Kristin", "Emma", "Liam",
    "Olivia", "Noah", "Ava", "Sophia", "Mason", "Isabella", "William", "Mia", "James", "Charlotte",
    "Benjamin", "Amelia", "Lucas", "Harper",
];

const LAST_NAMES: [&str; 24] = [
    "Cooper", "Miles", "Richards", "McKinney", "Bell", "Murphy", "Jones", "Watson", "Smith",
    "Johnson", "Williams", "Brown", "Davis", "Miller", "Wilson", "Moore", "Taylor", "Anderson",
    "Thomas", "Jackson", "White", "Harris", "Martin", "Garcia",
];

const COMPANIES: [&str; 16] = [
    "Microsoft", "Yahoo", "Adobe", "Tesla", "Google", "Facebook", "Apple", "Amazon", "Netflix",
    "Spotify", "Twitter", "LinkedIn", "Salesforce", "Oracle", "SAP", "IBM",
];

const COUNTRIES: [&str; 20] = [
    "United States",
    "Kiribati",
    "Israel",
    "Iran",
    "Réunion",
    "Curaçao",
    "Brazil",
    "Åland Islands",
    "Germany",
    "France",
    "Japan",
    "Canada",
    "Australia",
    "India",
    "United Kingdom",
    "Mexico",
    "Spain",
    "Italy",
    "South Korea",
    "Netherlands",
];

/// Materialize directory row `index`.
///
/// The draw order below is fixed; moving a draw changes every field drawn
/// after it for every index, and tests assert on record content.
pub fn generate_customer(index: usize) -> Customer {
    let mut rng = IndexedRng::for_index(index);

    let first = *rng.pick(&FIRST_NAMES);
    let last = *rng.pick(&LAST_NAMES);
    let company = *rng.pick(&COMPANIES);
    let area_code = rng.below(900) + 100;
    let line = rng.below(10_000);
    let country = *rng.pick(&COUNTRIES);
    let active = rng.chance(70);
    let created_offset = rng.in_range(0, 3 * 365 * 24 * 3600);

    let domain = company.to_lowercase().replace(' ', "");
    Customer {
        id: format!("cust-{index}"),
        name: format!("{first} {last}"),
        company: company.to_string(),
        phone: format!("({area_code}) 555-{line:04}"),
        email: format!("{}@{domain}.com", first.to_lowercase()),
        country: country.to_string(),
        status: if active {
            CustomerStatus::Active
        } else {
            CustomerStatus::Inactive
        },
        created_at: *REFERENCE_TIME - ChronoDuration::seconds(created_offset),
    }
}

fn customer_matches(customer: &Customer, needle: &str) -> bool {
    customer.name.to_lowercase().contains(needle)
        || customer.company.to_lowercase().contains(needle)
        || customer.email.to_lowercase().contains(needle)
}

fn sort_customers(rows: &mut [Customer], sort: Option<CustomerSort>) {
    match sort {
        Some(CustomerSort::Name) => rows.sort_by(|a, b| crate::engine::cmp_ci(&a.name, &b.name)),
        Some(CustomerSort::Status) => {
            rows.sort_by_key(|c| c.status.sort_rank());
        }
        Some(CustomerSort::Newest) => rows.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        None => {}
    }
}

/// Mock customer service over the virtual directory.
///
/// Ordering is page-local: each returned page is sorted on its own, but
/// pages are not globally ordered relative to each other for non-identity
/// sorts. A global sort would require materializing the whole directory.
pub struct CustomerDirectory {
    delay: Duration,
}

impl CustomerDirectory {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Resolve one page of customers.
    ///
    /// Without a search, only the indices of the requested page are
    /// generated and `total` is the nominal directory size. With a search,
    /// a bounded prefix of the index space is scanned and `total` is the
    /// match count found within that sample, a documented approximation of
    /// the true count.
    pub async fn customers(
        &self,
        params: &QueryParams<CustomerSort>,
    ) -> Result<PageEnvelope<Customer>, DataError> {
        simulate_latency(self.delay).await;
        params.validate()?;

        match params.search_term() {
            None => {
                let start = params.offset().min(CUSTOMER_POOL_SIZE);
                let end = (start + params.page_size).min(CUSTOMER_POOL_SIZE);
                let mut rows: Vec<Customer> = (start..end).map(generate_customer).collect();
                sort_customers(&mut rows, params.sort_by);
                Ok(PageEnvelope::window(
                    rows,
                    CUSTOMER_POOL_SIZE,
                    params.page,
                    params.page_size,
                ))
            }
            Some(term) => {
                let needle = term.to_lowercase();
                let mut matches = Vec::new();
                for index in 0..SEARCH_SCAN_LIMIT.min(CUSTOMER_POOL_SIZE) {
                    let customer = generate_customer(index);
                    if customer_matches(&customer, &needle) {
                        matches.push(customer);
                        if matches.len() == SEARCH_MATCH_CAP {
                            break;
                        }
                    }
                }
                debug!(matches = matches.len(), "customer search sample collected");
                sort_customers(&mut matches, params.sort_by);
                Ok(PageEnvelope::slice(matches, params.page, params.page_size))
            }
        }
    }

    pub async fn stats(&self) -> Result<CustomerStats, DataError> {
        simulate_latency(self.delay).await;
        Ok(CustomerStats {
            total_customers: 5423,
            total_customers_trend: 16.0,
            members: 1893,
            members_trend: -1.0,
            active_now: 189,
        })
    }
}

#[async_trait]
impl PageFetcher<Customer> for CustomerDirectory {
    type Sort = CustomerSort;

    async fn fetch_page(
        &self,
        params: QueryParams<CustomerSort>,
    ) -> Result<PageEnvelope<Customer>, CoreError> {
        self.customers(&params).await.map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> CustomerDirectory {
        CustomerDirectory::new(Duration::ZERO)
    }

    fn params(page: usize, search: Option<&str>, sort: Option<CustomerSort>) -> QueryParams<CustomerSort> {
        QueryParams {
            page,
            page_size: 8,
            search: search.map(str::to_string),
            sort_by: sort,
        }
    }

    #[test]
    fn test_generation_is_deterministic() {
        for index in [0, 1, 7, 8191, 255_999] {
            assert_eq!(generate_customer(index), generate_customer(index));
        }
    }

    #[test]
    fn test_ids_are_unique_per_index() {
        let ids: Vec<String> = (0..64).map(|i| generate_customer(i).id).collect();
        for (i, id) in ids.iter().enumerate() {
            assert_eq!(id, &format!("cust-{i}"));
        }
    }

    #[test]
    fn test_email_derived_from_name_and_company() {
        let customer = generate_customer(3);
        let first = customer.name.split(' ').next().unwrap().to_lowercase();
        assert!(customer.email.starts_with(&first));
        assert!(customer
            .email
            .ends_with(&format!("@{}.com", customer.company.to_lowercase().replace(' ', ""))));
    }

    #[tokio::test]
    async fn test_unsearched_page_reports_nominal_total() {
        let env = directory().customers(&params(2, None, None)).await.unwrap();
        assert_eq!(env.total, CUSTOMER_POOL_SIZE);
        assert_eq!(env.data.len(), 8);
        assert_eq!(env.total_pages, CUSTOMER_POOL_SIZE / 8);
        // Page 2 holds exactly indices 8..16.
        assert_eq!(env.data[0], generate_customer(8));
    }

    #[tokio::test]
    async fn test_blank_search_equals_no_search() {
        let dir = directory();
        let unfiltered = dir.customers(&params(1, None, None)).await.unwrap();
        let blank = dir.customers(&params(1, Some("   "), None)).await.unwrap();
        assert_eq!(unfiltered, blank);
    }

    #[tokio::test]
    async fn test_search_totals_are_sampled() {
        let needle = generate_customer(0).company.to_lowercase();
        let env = directory()
            .customers(&params(1, Some(&needle), None))
            .await
            .unwrap();
        assert!(env.total >= 1);
        assert!(env.total <= SEARCH_MATCH_CAP);
        for customer in &env.data {
            assert!(customer_matches(customer, &needle));
        }
    }

    #[tokio::test]
    async fn test_page_local_sort_by_name() {
        let env = directory()
            .customers(&params(3, None, Some(CustomerSort::Name)))
            .await
            .unwrap();
        let names: Vec<String> = env.data.iter().map(|c| c.name.to_lowercase()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[tokio::test]
    async fn test_out_of_range_page_is_empty() {
        let env = directory()
            .customers(&params(CUSTOMER_POOL_SIZE, None, None))
            .await
            .unwrap();
        assert!(env.data.is_empty());
        assert_eq!(env.total, CUSTOMER_POOL_SIZE);
    }

    #[tokio::test]
    async fn test_zero_page_is_invalid() {
        let err = directory().customers(&params(0, None, None)).await;
        assert!(matches!(err, Err(DataError::InvalidArgument(_))));
    }
}
