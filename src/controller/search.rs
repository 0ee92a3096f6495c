//! Search pipeline

use crate::api::{ApiClient, ApiResult, Pagination, TransportError};
use crate::controller::gate::{RenderOutcome, RequestGate};
use crate::view::{SearchPanel, SearchResultsView};
use std::sync::Arc;
use tokio::sync::watch;

/// The search box and site selector
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchForm {
    pub query: String,
    /// Empty means "all sites"
    pub site: String,
}

impl SearchForm {
    pub fn new(query: impl Into<String>, site: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            site: site.into(),
        }
    }
}

/// Runs searches and publishes results to the search panel
#[derive(Debug, Clone)]
pub struct SearchController {
    client: ApiClient,
    gate: RequestGate,
    panel: Arc<watch::Sender<SearchPanel>>,
    limit: Option<u32>,
}

impl SearchController {
    /// Creates a controller; `limit` is sent with every search when set
    pub fn new(client: ApiClient, limit: Option<u32>) -> Self {
        let (panel, _) = watch::channel(SearchPanel::Empty);
        Self {
            client,
            gate: RequestGate::new(),
            panel: Arc::new(panel),
            limit,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<SearchPanel> {
        self.panel.subscribe()
    }

    pub fn current(&self) -> SearchPanel {
        self.panel.borrow().clone()
    }

    /// Searches with the form values as entered
    ///
    /// The query is not checked for emptiness; the backend decides.
    pub async fn search(&self, form: &SearchForm) -> Result<RenderOutcome, TransportError> {
        let page = Pagination {
            offset: None,
            limit: self.limit,
        };
        self.search_with(form, page).await
    }

    /// Searches a specific results page
    pub async fn search_with(
        &self,
        form: &SearchForm,
        page: Pagination,
    ) -> Result<RenderOutcome, TransportError> {
        let token = self.gate.issue();
        tracing::debug!("Searching for '{}' (site: '{}')", form.query, form.site);

        let site = Some(form.site.as_str()).filter(|s| !s.is_empty());
        let panel = match self.client.search_page(&form.query, site, page).await? {
            ApiResult::Success(results) => {
                tracing::info!(
                    "Search '{}' returned {} of {} results",
                    form.query,
                    results.data.len(),
                    results.count
                );
                SearchPanel::Results(SearchResultsView::from(&results))
            }
            ApiResult::Failure(error) => {
                tracing::info!("Search '{}' rejected: {}", form.query, error);
                SearchPanel::Failed(error)
            }
        };

        Ok(self.gate.publish(token, &self.panel, panel))
    }
}
