//! Collection view state machine
//!
//! One generic controller drives every browse panel: it owns the query
//! parameters (page, page size, search, sort), the fetch lifecycle status
//! and the current page of rows, and coordinates debounced search against
//! immediate page/sort refetches.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use std::time::Duration;

use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::fetch::PageFetcher;
use crate::query::{QueryParams, DEFAULT_PAGE_SIZE};
use crate::subscriber::CollectionSubscriber;

/// Quiet interval after the last keystroke before a search fetch is issued
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Fetch lifecycle status of a collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// No fetch has been issued yet
    Idle,
    /// A fetch is in flight
    Loading,
    /// The most recent fetch landed
    Succeeded,
    /// The most recent fetch rejected
    Failed,
}

/// Observable state of one collection panel
#[derive(Debug, Clone)]
pub struct CollectionState<T, S> {
    /// Rows of the current page
    pub items: Vec<T>,
    /// Filtered row count across all pages
    pub total: usize,
    /// Page count for the current filter
    pub total_pages: usize,
    /// Fetch lifecycle status
    pub status: LoadStatus,
    /// User-facing message of the last failure
    pub error: Option<String>,
    /// Raw search box contents
    pub search: String,
    /// Current sort key
    pub sort_by: S,
    /// 1-indexed current page
    pub current_page: usize,
    /// Rows per page
    pub page_size: usize,
}

impl<T, S> CollectionState<T, S> {
    pub fn new(sort_by: S, page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            total_pages: 0,
            status: LoadStatus::Idle,
            error: None,
            search: String::new(),
            sort_by,
            current_page: 1,
            page_size,
        }
    }
}

/// State machine coordinating fetches for one collection panel.
///
/// Page and sort changes fetch immediately; search keystrokes settle for
/// [`SEARCH_DEBOUNCE`] first, each new keystroke cancelling the previous
/// pending timer. Every issued fetch carries a generation token and a
/// completion whose token is no longer the latest is discarded, so an old
/// slow fetch can never overwrite a newer result.
pub struct CollectionController<T, F: PageFetcher<T>> {
    fetcher: Arc<F>,
    state: Arc<RwLock<CollectionState<T, F::Sort>>>,
    /// Generation token of the most recently issued fetch
    request_seq: Arc<AtomicU64>,
    /// Generation token of the most recent search keystroke
    debounce_seq: Arc<AtomicU64>,
    debounce: Duration,
    subscribers: Arc<RwLock<Vec<Weak<dyn CollectionSubscriber>>>>,
}

impl<T, F: PageFetcher<T>> Clone for CollectionController<T, F> {
    fn clone(&self) -> Self {
        Self {
            fetcher: self.fetcher.clone(),
            state: self.state.clone(),
            request_seq: self.request_seq.clone(),
            debounce_seq: self.debounce_seq.clone(),
            debounce: self.debounce,
            subscribers: self.subscribers.clone(),
        }
    }
}

impl<T, F> CollectionController<T, F>
where
    T: Clone + Send + Sync + 'static,
    F: PageFetcher<T> + Send + Sync + 'static,
{
    /// Create an idle controller over a fetch capability.
    pub fn new(fetcher: Arc<F>, initial_sort: F::Sort) -> Self {
        Self::with_page_size(fetcher, initial_sort, DEFAULT_PAGE_SIZE)
    }

    /// Create an idle controller with a non-default page size.
    pub fn with_page_size(fetcher: Arc<F>, initial_sort: F::Sort, page_size: usize) -> Self {
        Self {
            fetcher,
            state: Arc::new(RwLock::new(CollectionState::new(initial_sort, page_size))),
            request_seq: Arc::new(AtomicU64::new(0)),
            debounce_seq: Arc::new(AtomicU64::new(0)),
            debounce: SEARCH_DEBOUNCE,
            subscribers: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Override the search debounce interval.
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> CollectionState<T, F::Sort> {
        self.state.read().clone()
    }

    /// Query parameters derived from the current state. An empty or
    /// whitespace-only search box maps to no filter.
    pub fn query_params(&self) -> QueryParams<F::Sort> {
        let state = self.state.read();
        QueryParams {
            page: state.current_page,
            page_size: state.page_size,
            search: if state.search.trim().is_empty() {
                None
            } else {
                Some(state.search.clone())
            },
            sort_by: Some(state.sort_by),
        }
    }

    /// Update the search text. The page resets to 1 synchronously; the
    /// fetch itself is deferred until the keystroke burst settles.
    pub fn set_search(&self, text: impl Into<String>) {
        {
            let mut state = self.state.write();
            state.search = text.into();
            state.current_page = 1;
        }
        self.notify_subscribers();

        let token = self.debounce_seq.fetch_add(1, Ordering::SeqCst) + 1;
        let this = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(this.debounce).await;
            // Only the timer that survived the burst uncancelled fires.
            if this.debounce_seq.load(Ordering::SeqCst) == token {
                this.run_fetch().await;
            } else {
                debug!(token, "debounced search fetch cancelled by newer keystroke");
            }
        });
    }

    /// Change the sort key and refetch immediately. Any pending search
    /// timer is cancelled; the fetch issued here already carries the
    /// latest search text.
    pub fn set_sort_by(&self, sort: F::Sort) {
        self.state.write().sort_by = sort;
        self.notify_subscribers();
        self.cancel_pending_search();
        self.spawn_fetch();
    }

    /// Jump to a page and refetch immediately, cancelling any pending
    /// search timer the same way a sort change does.
    pub fn set_page(&self, page: usize) {
        self.state.write().current_page = page.max(1);
        self.notify_subscribers();
        self.cancel_pending_search();
        self.spawn_fetch();
    }

    /// Replay the fetch with the current query parameters. Valid from any
    /// state; this is the user-initiated retry.
    pub fn retry(&self) {
        self.spawn_fetch();
    }

    /// Fetch with the current query parameters and wait for the result to
    /// land (or be superseded). Used for the initial load.
    pub async fn refresh(&self) {
        self.run_fetch().await;
    }

    /// Register an observer. Held weakly; dropped observers are pruned.
    pub fn add_subscriber(&self, subscriber: Arc<dyn CollectionSubscriber>) {
        self.subscribers.write().push(Arc::downgrade(&subscriber));
    }

    /// Invalidate the token of any debounce timer still waiting, so it
    /// does not re-issue a fetch for parameters already fetched.
    fn cancel_pending_search(&self) {
        self.debounce_seq.fetch_add(1, Ordering::SeqCst);
    }

    fn spawn_fetch(&self) {
        let this = self.clone();
        tokio::spawn(async move {
            this.run_fetch().await;
        });
    }

    async fn run_fetch(&self) {
        let token = self.request_seq.fetch_add(1, Ordering::SeqCst) + 1;
        let params = self.query_params();
        {
            let mut state = self.state.write();
            state.status = LoadStatus::Loading;
            state.error = None;
        }
        self.notify_subscribers();

        let result = self.fetcher.fetch_page(params).await;

        if self.request_seq.load(Ordering::SeqCst) != token {
            debug!(token, "discarding superseded fetch result");
            return;
        }

        {
            let mut state = self.state.write();
            match result {
                Ok(envelope) => {
                    state.status = LoadStatus::Succeeded;
                    state.items = envelope.data;
                    state.total = envelope.total;
                    state.total_pages = envelope.total_pages;
                    // The envelope's echoed page is authoritative.
                    state.current_page = envelope.page;
                }
                Err(err) => {
                    warn!(error = %err, "collection fetch failed");
                    state.status = LoadStatus::Failed;
                    state.error = Some(err.to_string());
                    // Rows from the last successful fetch stay in place.
                }
            }
        }
        self.notify_subscribers();
    }

    fn notify_subscribers(&self) {
        let mut subscribers = self.subscribers.write();
        subscribers.retain(|weak| weak.strong_count() > 0);
        for weak in subscribers.iter() {
            if let Some(subscriber) = weak.upgrade() {
                subscriber.on_collection_change();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::query::PageEnvelope;
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::collections::VecDeque;
    use std::sync::atomic::AtomicBool;
    use std::sync::atomic::AtomicUsize;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TestSort {
        Newest,
        Name,
    }

    /// Fetcher that records every call and takes a scripted latency per
    /// call, so tests can interleave slow and fast completions.
    #[derive(Default)]
    struct ScriptedFetcher {
        calls: Mutex<Vec<QueryParams<TestSort>>>,
        latencies: Mutex<VecDeque<Duration>>,
        fail_next: AtomicBool,
    }

    impl ScriptedFetcher {
        fn push_latency(&self, latency: Duration) {
            self.latencies.lock().push_back(latency);
        }

        fn calls(&self) -> Vec<QueryParams<TestSort>> {
            self.calls.lock().clone()
        }
    }

    #[async_trait]
    impl PageFetcher<String> for ScriptedFetcher {
        type Sort = TestSort;

        async fn fetch_page(
            &self,
            params: QueryParams<TestSort>,
        ) -> Result<PageEnvelope<String>, CoreError> {
            let call_no = {
                let mut calls = self.calls.lock();
                calls.push(params.clone());
                calls.len()
            };
            let latency = self
                .latencies
                .lock()
                .pop_front()
                .unwrap_or(Duration::from_millis(10));
            tokio::time::sleep(latency).await;
            if self.fail_next.swap(false, Ordering::SeqCst) {
                return Err(CoreError::FetchFailed("simulated network failure".into()));
            }
            Ok(PageEnvelope::window(
                vec![format!("call-{call_no}")],
                100,
                params.page,
                params.page_size,
            ))
        }
    }

    fn controller(fetcher: Arc<ScriptedFetcher>) -> CollectionController<String, ScriptedFetcher> {
        CollectionController::new(fetcher, TestSort::Newest)
    }

    #[tokio::test(start_paused = true)]
    async fn test_initial_state_is_idle() {
        let ctrl = controller(Arc::new(ScriptedFetcher::default()));
        let state = ctrl.state();
        assert_eq!(state.status, LoadStatus::Idle);
        assert!(state.items.is_empty());
        assert_eq!(state.current_page, 1);
        assert_eq!(state.page_size, DEFAULT_PAGE_SIZE);
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_resets_page() {
        let ctrl = controller(Arc::new(ScriptedFetcher::default()));
        ctrl.set_page(5);
        assert_eq!(ctrl.state().current_page, 5);

        ctrl.set_search("jane");
        let state = ctrl.state();
        assert_eq!(state.current_page, 1);
        assert_eq!(state.search, "jane");
    }

    #[tokio::test(start_paused = true)]
    async fn test_debounce_collapses_keystroke_burst() {
        let fetcher = Arc::new(ScriptedFetcher::default());
        let ctrl = controller(fetcher.clone());

        ctrl.set_search("s");
        tokio::time::sleep(Duration::from_millis(100)).await;
        ctrl.set_search("se");
        tokio::time::sleep(Duration::from_millis(100)).await;
        ctrl.set_search("sea");
        tokio::time::sleep(Duration::from_millis(1000)).await;

        let calls = fetcher.calls();
        assert_eq!(calls.len(), 1, "burst must collapse to one fetch");
        assert_eq!(calls[0].search.as_deref(), Some("sea"));
        assert_eq!(calls[0].page, 1);
        assert_eq!(ctrl.state().status, LoadStatus::Succeeded);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_fetch_result_is_discarded() {
        let fetcher = Arc::new(ScriptedFetcher::default());
        let ctrl = controller(fetcher.clone());

        // The debounced search fetch will be slow; the later sort fetch fast.
        fetcher.push_latency(Duration::from_millis(500));
        fetcher.push_latency(Duration::from_millis(10));

        ctrl.set_search("jane");
        // Let the debounce settle and put the slow search fetch in flight.
        tokio::time::sleep(Duration::from_millis(350)).await;
        ctrl.set_sort_by(TestSort::Name);
        tokio::time::sleep(Duration::from_millis(1000)).await;

        let calls = fetcher.calls();
        assert_eq!(calls.len(), 2);
        // The sort fetch was issued last; the search fetch resolved after it
        // and must not have overwritten its rows.
        assert_eq!(ctrl.state().items, vec!["call-2".to_string()]);
        assert_eq!(ctrl.state().status, LoadStatus::Succeeded);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failure_keeps_previous_rows() {
        let fetcher = Arc::new(ScriptedFetcher::default());
        let ctrl = controller(fetcher.clone());

        ctrl.refresh().await;
        assert_eq!(ctrl.state().items, vec!["call-1".to_string()]);

        fetcher.fail_next.store(true, Ordering::SeqCst);
        ctrl.refresh().await;
        let state = ctrl.state();
        assert_eq!(state.status, LoadStatus::Failed);
        assert_eq!(state.error.as_deref(), Some("simulated network failure"));
        assert_eq!(state.items, vec!["call-1".to_string()]);
        assert_eq!(state.total, 100);

        // User-initiated retry replays the fetch and clears the error.
        ctrl.retry();
        tokio::time::sleep(Duration::from_millis(100)).await;
        let state = ctrl.state();
        assert_eq!(state.status, LoadStatus::Succeeded);
        assert_eq!(state.error, None);
        assert_eq!(state.items, vec!["call-3".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_page_change_fetches_immediately() {
        let fetcher = Arc::new(ScriptedFetcher::default());
        let ctrl = controller(fetcher.clone());

        ctrl.set_page(3);
        tokio::time::sleep(Duration::from_millis(100)).await;

        let calls = fetcher.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].page, 3);
        // The echoed page from the envelope is authoritative.
        assert_eq!(ctrl.state().current_page, 3);
        assert_eq!(ctrl.state().total_pages, 13);
    }

    #[tokio::test(start_paused = true)]
    async fn test_page_change_cancels_pending_search_timer() {
        let fetcher = Arc::new(ScriptedFetcher::default());
        let ctrl = controller(fetcher.clone());

        ctrl.set_search("jane");
        tokio::time::sleep(Duration::from_millis(100)).await;
        // The page change fetches with the latest search text itself, so
        // the still-pending debounce timer must not fire a second fetch.
        ctrl.set_page(2);
        tokio::time::sleep(Duration::from_millis(1000)).await;

        let calls = fetcher.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].page, 2);
        assert_eq!(calls[0].search.as_deref(), Some("jane"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_query_params_drop_blank_search() {
        let ctrl = controller(Arc::new(ScriptedFetcher::default()));
        assert_eq!(ctrl.query_params().search, None);
        ctrl.set_search("   ");
        assert_eq!(ctrl.query_params().search, None);
        ctrl.set_search("acme");
        assert_eq!(ctrl.query_params().search.as_deref(), Some("acme"));
        assert_eq!(ctrl.query_params().sort_by, Some(TestSort::Newest));
    }

    struct CountingSubscriber {
        notifications: AtomicUsize,
    }

    impl CollectionSubscriber for CountingSubscriber {
        fn on_collection_change(&self) {
            self.notifications.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_subscribers_observe_fetch_lifecycle() {
        let ctrl = controller(Arc::new(ScriptedFetcher::default()));
        let subscriber = Arc::new(CountingSubscriber {
            notifications: AtomicUsize::new(0),
        });
        ctrl.add_subscriber(subscriber.clone());

        ctrl.refresh().await;
        // Loading and Succeeded are both observable.
        assert_eq!(subscriber.notifications.load(Ordering::SeqCst), 2);

        drop(subscriber);
        ctrl.refresh().await;
        // Dropped subscribers are pruned on the next notification pass.
        assert!(ctrl.subscribers.read().is_empty());
    }
}
