//! Pagination flow for the events list view.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::client::EventsApi;
use crate::domain::{Event, Page};

use super::slot::RequestSlot;
use super::RequestState;

#[derive(Debug, Clone, Copy)]
struct PageParams {
    current_page: u32,
    page_size: u32,
}

/// Drives the paginated list view over one [`RequestSlot`].
///
/// `current_page` and `page_size` are pager-owned query parameters, not
/// state of the slot: the slot only ever sees the resulting list calls.
/// Navigation that would leave the listing (`next_page` past the last page,
/// `previous_page` before the first) is a no-op even when invoked directly,
/// not just when a UI control is disabled.
#[derive(Debug)]
pub struct EventPager {
    api: Arc<dyn EventsApi>,
    slot: RequestSlot<Page<Event>>,
    params: RwLock<PageParams>,
    last_loaded: RwLock<Option<Page<Event>>>,
}

impl EventPager {
    /// Creates a pager starting at page 0 with the given page size.
    #[must_use]
    pub fn new(api: Arc<dyn EventsApi>, page_size: u32) -> Self {
        Self {
            api,
            slot: RequestSlot::new(),
            params: RwLock::new(PageParams {
                current_page: 0,
                page_size: page_size.max(1),
            }),
            last_loaded: RwLock::new(None),
        }
    }

    /// The page index the pager currently targets.
    pub async fn current_page(&self) -> u32 {
        self.params.read().await.current_page
    }

    /// The page size the pager currently targets.
    pub async fn page_size(&self) -> u32 {
        self.params.read().await.page_size
    }

    /// Snapshot of the slot state for rendering.
    pub async fn state(&self) -> RequestState<Page<Event>> {
        self.slot.state().await
    }

    /// The most recently applied page, kept across reloads so boundary
    /// checks still work while a newer request is in flight.
    pub async fn last_loaded(&self) -> Option<Page<Event>> {
        self.last_loaded.read().await.clone()
    }

    /// Issues a list call for the current parameters. Also serves as the
    /// manual retry action after a failure.
    pub async fn load(&self) {
        let (page, size) = {
            let params = self.params.read().await;
            (params.current_page, params.page_size)
        };
        let ticket = self.slot.begin().await;
        let outcome = self.api.list(page, size).await;
        let applied_page = outcome.as_ref().ok().cloned();
        if self.slot.resolve(ticket, outcome).await
            && let Some(loaded) = applied_page
        {
            *self.last_loaded.write().await = Some(loaded);
        }
    }

    /// Navigates to page `n`. A no-op when `n` is already the current
    /// page; otherwise issues a new list call that supersedes any
    /// in-flight one.
    pub async fn go_to_page(&self, n: u32) {
        {
            let mut params = self.params.write().await;
            if params.current_page == n {
                return;
            }
            params.current_page = n;
        }
        self.load().await;
    }

    /// Advances one page unless the last loaded page is the final one (or
    /// nothing has loaded yet).
    pub async fn next_page(&self) {
        let Some(page) = self.last_loaded().await else {
            return;
        };
        if page.is_last {
            return;
        }
        let current = self.current_page().await;
        self.go_to_page(current + 1).await;
    }

    /// Goes back one page unless the last loaded page is the first one (or
    /// nothing has loaded yet).
    pub async fn previous_page(&self) {
        let Some(page) = self.last_loaded().await else {
            return;
        };
        if page.is_first {
            return;
        }
        let current = self.current_page().await;
        self.go_to_page(current.saturating_sub(1)).await;
    }

    /// Changes the page size, resetting to page 0 and reloading. A no-op
    /// when the size is unchanged.
    pub async fn set_page_size(&self, size: u32) {
        {
            let mut params = self.params.write().await;
            if params.page_size == size.max(1) {
                return;
            }
            params.page_size = size.max(1);
            params.current_page = 0;
        }
        self.load().await;
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::time::Duration;

    use crate::domain::EventRequest;
    use crate::error::ApiError;

    fn sample_event(id: i64) -> Event {
        Event {
            id: Some(id),
            title: format!("event {id}"),
            description: None,
            event_at: chrono::Utc::now() + chrono::Duration::days(1),
            location: "somewhere".to_string(),
            created_at: None,
        }
    }

    /// In-memory listing of `total` events, with optional per-page delays
    /// to model slow responses.
    #[derive(Debug)]
    struct FakeApi {
        total: u64,
        delays: Mutex<HashMap<u32, Duration>>,
        fail_all: bool,
    }

    impl FakeApi {
        fn with_total(total: u64) -> Self {
            Self {
                total,
                delays: Mutex::new(HashMap::new()),
                fail_all: false,
            }
        }

        fn delay_page(self, page: u32, delay: Duration) -> Self {
            if let Ok(mut delays) = self.delays.lock() {
                delays.insert(page, delay);
            }
            self
        }
    }

    #[async_trait]
    impl EventsApi for FakeApi {
        async fn list(&self, page: u32, size: u32) -> Result<Page<Event>, ApiError> {
            let delay = self
                .delays
                .lock()
                .ok()
                .and_then(|delays| delays.get(&page).copied());
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }
            if self.fail_all {
                return Err(ApiError::from_status(503, None));
            }
            let start = u64::from(page) * u64::from(size);
            let end = (start + u64::from(size)).min(self.total);
            let content: Vec<Event> = (start..end)
                .map(|i| sample_event(i64::try_from(i).unwrap_or(0)))
                .collect();
            Ok(Page::of(content, page, size, self.total))
        }

        async fn get_by_id(&self, _id: i64) -> Result<Event, ApiError> {
            Err(ApiError::NotFound { message: None })
        }

        async fn create(&self, _draft: &EventRequest) -> Result<Event, ApiError> {
            Err(ApiError::from_status(503, None))
        }

        async fn update(&self, _id: i64, _draft: &EventRequest) -> Result<Event, ApiError> {
            Err(ApiError::from_status(503, None))
        }

        async fn delete(&self, _id: i64) -> Result<(), ApiError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn load_populates_slot_and_snapshot() {
        let pager = EventPager::new(Arc::new(FakeApi::with_total(5)), 2);
        pager.load().await;

        let state = pager.state().await;
        let Some(page) = state.success() else {
            panic!("expected success state");
        };
        assert_eq!(page.content.len(), 2);
        assert_eq!(page.total_pages, 3);
        assert!(pager.last_loaded().await.is_some());
    }

    #[tokio::test]
    async fn go_to_same_page_is_noop() {
        let pager = EventPager::new(Arc::new(FakeApi::with_total(5)), 2);
        pager.go_to_page(0).await;
        assert_eq!(pager.state().await, RequestState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn rapid_pagination_applies_latest_page() {
        // Page 1 answers slowly; page 2 answers immediately. The slow
        // page-1 response must not overwrite the displayed page 2.
        let api = FakeApi::with_total(10).delay_page(1, Duration::from_millis(500));
        let pager = EventPager::new(Arc::new(api), 2);

        tokio::join!(pager.go_to_page(1), pager.go_to_page(2));

        let state = pager.state().await;
        let Some(page) = state.success() else {
            panic!("expected success state");
        };
        assert_eq!(page.page_number, 2);
        let Some(snapshot) = pager.last_loaded().await else {
            panic!("expected snapshot");
        };
        assert_eq!(snapshot.page_number, 2);
    }

    #[tokio::test]
    async fn next_and_previous_respect_boundaries() {
        let pager = EventPager::new(Arc::new(FakeApi::with_total(4)), 2);

        // Before any load both directions are no-ops.
        pager.next_page().await;
        assert_eq!(pager.current_page().await, 0);

        pager.load().await;
        pager.previous_page().await;
        assert_eq!(pager.current_page().await, 0);

        pager.next_page().await;
        assert_eq!(pager.current_page().await, 1);

        // Page 1 of 2 is the last page; advancing further is a no-op.
        pager.next_page().await;
        assert_eq!(pager.current_page().await, 1);

        pager.previous_page().await;
        assert_eq!(pager.current_page().await, 0);
    }

    #[tokio::test]
    async fn set_page_size_resets_to_first_page() {
        let pager = EventPager::new(Arc::new(FakeApi::with_total(10)), 2);
        pager.load().await;
        pager.go_to_page(3).await;
        assert_eq!(pager.current_page().await, 3);

        pager.set_page_size(5).await;
        assert_eq!(pager.current_page().await, 0);
        assert_eq!(pager.page_size().await, 5);

        let state = pager.state().await;
        let Some(page) = state.success() else {
            panic!("expected success state");
        };
        assert_eq!(page.page_size, 5);
        assert_eq!(page.page_number, 0);
    }

    #[tokio::test]
    async fn failure_surfaces_display_message_and_allows_retry() {
        let mut api = FakeApi::with_total(4);
        api.fail_all = true;
        let pager = EventPager::new(Arc::new(api), 2);
        pager.load().await;

        let state = pager.state().await;
        assert_eq!(state.failure(), Some("server error"));

        // Manual retry re-issues the same operation.
        pager.load().await;
        assert_eq!(pager.state().await.failure(), Some("server error"));
    }
}
