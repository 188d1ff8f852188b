//! Paginated resource loading over the gateway.
//!
//! The controller turns a [`ResourceQuery`] into a [`Page`] snapshot. List
//! reads are fail-soft: a failed fetch degrades to an empty page so a list
//! view always has something coherent to show, while the propagating variant
//! stays available for callers that need an explicit failure. Overlapping
//! loads are detectable through a monotonic sequence instead of silently
//! racing last-resolved-wins.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use pagination::{ListEnvelope, Page, PageSize};
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::domain::error::ApiResult;
use crate::domain::gateway::ApiGateway;
use crate::domain::query::ResourceQuery;

/// Result of a tracked load: either the freshest known page or a marker that
/// a newer load was issued while this one was in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome<T> {
    /// No newer load was issued; display this page.
    Fresh(Page<T>),
    /// A newer load superseded this one; discard the result.
    Superseded,
}

impl<T> LoadOutcome<T> {
    /// The page, when the load was not superseded.
    pub fn fresh(self) -> Option<Page<T>> {
        match self {
            Self::Fresh(page) => Some(page),
            Self::Superseded => None,
        }
    }
}

/// Loader for paginated collections.
pub struct ResourceController {
    gateway: Arc<ApiGateway>,
    page_size: PageSize,
    sequence: AtomicU64,
}

impl ResourceController {
    /// Build a controller using the backend's deployed page size.
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self::with_page_size(gateway, PageSize::DEFAULT)
    }

    /// Build a controller with an explicit page size (kept in lockstep with
    /// the backend's pagination configuration; never inferred from
    /// responses).
    pub fn with_page_size(gateway: Arc<ApiGateway>, page_size: PageSize) -> Self {
        Self {
            gateway,
            page_size,
            sequence: AtomicU64::new(0),
        }
    }

    /// The page size this controller computes page counts with.
    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Fetch one page, propagating any failure.
    pub async fn try_load_page<T: DeserializeOwned>(
        &self,
        query: &ResourceQuery,
    ) -> ApiResult<Page<T>> {
        let envelope: ListEnvelope<T> = self
            .gateway
            .get(query.path(), &query.request_filters())
            .await?;
        Ok(Page::from_envelope(envelope, query.page(), self.page_size))
    }

    /// Fetch one page, degrading to an empty page on any failure.
    ///
    /// This is the list-view contract: a broken backend yields an empty but
    /// coherent page rather than an error the view cannot render.
    pub async fn load_page<T: DeserializeOwned>(&self, query: &ResourceQuery) -> Page<T> {
        match self.try_load_page(query).await {
            Ok(page) => page,
            Err(error) => {
                warn!(resource = %query.path(), page = %query.page(), %error,
                    "list fetch degraded to empty page");
                Page::empty(self.page_size)
            }
        }
    }

    /// Fetch one page and report whether a newer load was issued meanwhile.
    ///
    /// Callers that render the result of every load would otherwise show
    /// whichever response resolved last, not the one requested last.
    pub async fn load_page_tracked<T: DeserializeOwned>(
        &self,
        query: &ResourceQuery,
    ) -> LoadOutcome<T> {
        let ticket = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        let page = self.load_page(query).await;
        if self.sequence.load(Ordering::SeqCst) == ticket {
            LoadOutcome::Fresh(page)
        } else {
            LoadOutcome::Superseded
        }
    }
}

#[cfg(test)]
mod tests {
    //! Coverage for the fail-soft contract and the supersession guard.

    use std::sync::Mutex;

    use async_trait::async_trait;
    use pagination::PageNumber;
    use rstest::rstest;
    use url::Url;

    use super::*;
    use crate::domain::ports::{ApiRequest, ApiResponse, ApiTransport, MockApiTransport, TransportError};
    use crate::domain::query::{Filters, ResourcePath};
    use crate::domain::session::SessionHandle;

    const EMPTY_ENVELOPE: &str = "{\"results\":[],\"count\":0,\"next\":null,\"previous\":null}";

    fn controller_over(responses: Vec<(u16, &'static str)>) -> ResourceController {
        let queue = Mutex::new(responses);
        let mut transport = MockApiTransport::new();
        transport.expect_execute().returning(move |_| {
            let (status, body) = {
                let mut guard = queue.lock().expect("response queue poisoned");
                if guard.is_empty() {
                    (200, EMPTY_ENVELOPE)
                } else {
                    guard.remove(0)
                }
            };
            Ok(ApiResponse {
                status,
                body: body.as_bytes().to_vec(),
            })
        });
        let gateway = ApiGateway::new(
            Arc::new(transport),
            Url::parse("http://127.0.0.1:8000/api/").expect("valid base"),
            SessionHandle::new(),
        )
        .expect("gateway should build");
        ResourceController::new(Arc::new(gateway))
    }

    fn teams_page(page: u64) -> ResourceQuery {
        ResourceQuery::new(
            ResourcePath::new("teams"),
            Filters::new(),
            PageNumber::new(page).expect("valid page"),
        )
    }

    #[tokio::test]
    async fn maps_envelope_onto_requested_page() {
        let controller = controller_over(vec![(
            200,
            r#"{"results":[{"id":1},{"id":2}],"count":45,
                "next":"http://127.0.0.1:8000/api/teams/?page=3",
                "previous":"http://127.0.0.1:8000/api/teams/?page=1"}"#,
        )]);

        let page: Page<serde_json::Value> = controller
            .try_load_page(&teams_page(2))
            .await
            .expect("fetch should succeed");
        assert_eq!(page.current_page().get(), 2);
        assert_eq!(page.total_pages(), 3);
        assert_eq!(page.items().len(), 2);
    }

    #[rstest]
    #[case(500)]
    #[case(404)]
    #[case(401)]
    #[tokio::test]
    async fn list_failures_degrade_to_empty_page(#[case] status: u16) {
        let controller = controller_over(vec![(status, "{\"detail\":\"broken\"}")]);

        let page: Page<serde_json::Value> = controller.load_page(&teams_page(1)).await;
        assert_eq!(page.total_count(), 0);
        assert!(page.is_empty());
        assert!(!page.has_previous());
        assert!(!page.has_next());
    }

    #[tokio::test]
    async fn propagating_variant_surfaces_the_failure() {
        let controller = controller_over(vec![(500, "boom")]);

        let error = controller
            .try_load_page::<serde_json::Value>(&teams_page(1))
            .await
            .expect_err("500 must propagate");
        assert_eq!(error.http_status(), Some(500));
    }

    /// Transport that parks once before responding, so overlapping loads
    /// genuinely interleave on a current-thread runtime.
    struct YieldingTransport;

    #[async_trait]
    impl ApiTransport for YieldingTransport {
        async fn execute(&self, _request: ApiRequest) -> Result<ApiResponse, TransportError> {
            tokio::task::yield_now().await;
            Ok(ApiResponse {
                status: 200,
                body: EMPTY_ENVELOPE.as_bytes().to_vec(),
            })
        }
    }

    #[tokio::test]
    async fn overlapping_tracked_loads_mark_the_older_as_superseded() {
        let gateway = ApiGateway::new(
            Arc::new(YieldingTransport),
            Url::parse("http://127.0.0.1:8000/api/").expect("valid base"),
            SessionHandle::new(),
        )
        .expect("gateway should build");
        let controller = ResourceController::new(Arc::new(gateway));

        let older = teams_page(1);
        let newer = older.with_page(PageNumber::new(2).expect("valid page"));
        let (first, second) = tokio::join!(
            controller.load_page_tracked::<serde_json::Value>(&older),
            controller.load_page_tracked::<serde_json::Value>(&newer),
        );
        assert_eq!(first, LoadOutcome::Superseded);
        assert!(second.fresh().is_some(), "latest load must stay fresh");
    }

    #[tokio::test]
    async fn solitary_tracked_load_stays_fresh() {
        let controller = controller_over(Vec::new());
        let outcome = controller
            .load_page_tracked::<serde_json::Value>(&teams_page(1))
            .await;
        assert!(outcome.fresh().is_some());
    }
}
