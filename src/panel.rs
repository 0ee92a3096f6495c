//! The control panel
//!
//! `Panel` owns the five components and the user inputs, and is the single
//! place where transport failures are turned into user-visible notices.

use crate::api::{ApiClient, Pagination, TransportError};
use crate::config::Config;
use crate::controller::{
    report_transport_failure, IndexingController, NoticeSender, PageForm, RenderOutcome,
    SearchController, SearchForm, StatisticsRenderer, TabController, TriggerElement,
};
use crate::view::{Notice, SearchPanel, StatisticsPanel};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

pub struct Panel {
    tabs: TabController,
    statistics: StatisticsRenderer,
    search: SearchController,
    indexing: IndexingController,
    notices: NoticeSender,
    /// URL input of the management tab
    pub page_form: PageForm,
    /// Query and site inputs of the search tab
    pub search_form: SearchForm,
}

impl Panel {
    /// Builds a panel against the configured backend
    ///
    /// Returns the panel and the receiving end of its notice channel.
    pub fn new(config: &Config) -> crate::Result<(Self, mpsc::UnboundedReceiver<Notice>)> {
        let client = ApiClient::from_config(&config.backend)?;
        Self::with_client(client, config)
    }

    /// Builds a panel around an existing client
    pub fn with_client(
        client: ApiClient,
        config: &Config,
    ) -> crate::Result<(Self, mpsc::UnboundedReceiver<Notice>)> {
        let (notices, receiver) = mpsc::unbounded_channel();
        let statistics = StatisticsRenderer::new(client.clone());
        let tabs = TabController::from_config(&config.tabs, statistics.clone(), notices.clone())?;

        let panel = Self {
            tabs,
            statistics,
            search: SearchController::new(client.clone(), config.search.limit),
            indexing: IndexingController::new(client),
            notices,
            page_form: PageForm::default(),
            search_form: SearchForm::default(),
        };
        Ok((panel, receiver))
    }

    /// Initial page load: one statistics refresh regardless of the active tab
    pub async fn load(&self) -> Result<RenderOutcome, TransportError> {
        tracing::debug!("Initial statistics load");
        self.refresh_statistics().await
    }

    /// Switches tabs; see [`TabController::activate`]
    pub fn activate_tab(
        &mut self,
        tab: &str,
        trigger: TriggerElement,
    ) -> crate::Result<Option<JoinHandle<()>>> {
        Ok(self.tabs.activate(tab, trigger)?)
    }

    pub async fn refresh_statistics(&self) -> Result<RenderOutcome, TransportError> {
        let outcome = self.statistics.refresh().await;
        self.report(outcome)
    }

    /// Searches with the current `search_form`
    pub async fn search(&self) -> Result<RenderOutcome, TransportError> {
        let outcome = self.search.search(&self.search_form).await;
        self.report(outcome)
    }

    /// Searches a specific page with the current `search_form`
    pub async fn search_page(&self, page: Pagination) -> Result<RenderOutcome, TransportError> {
        let outcome = self.search.search_with(&self.search_form, page).await;
        self.report(outcome)
    }

    pub async fn start_indexing(&self) -> Result<Notice, TransportError> {
        let outcome = self.indexing.start().await;
        self.notify(outcome)
    }

    pub async fn stop_indexing(&self) -> Result<Notice, TransportError> {
        let outcome = self.indexing.stop().await;
        self.notify(outcome)
    }

    /// Queues the page in the current `page_form`
    pub async fn index_page(&self) -> Result<Notice, TransportError> {
        let outcome = self.indexing.index_page(&self.page_form).await;
        self.notify(outcome)
    }

    pub fn tabs(&self) -> &TabController {
        &self.tabs
    }

    pub fn statistics_panel(&self) -> StatisticsPanel {
        self.statistics.current()
    }

    pub fn search_panel(&self) -> SearchPanel {
        self.search.current()
    }

    pub fn subscribe_statistics(&self) -> watch::Receiver<StatisticsPanel> {
        self.statistics.subscribe()
    }

    pub fn subscribe_search(&self) -> watch::Receiver<SearchPanel> {
        self.search.subscribe()
    }

    fn report<T>(&self, outcome: Result<T, TransportError>) -> Result<T, TransportError> {
        if let Err(e) = &outcome {
            report_transport_failure(&self.notices, e);
        }
        outcome
    }

    fn notify(&self, outcome: Result<Notice, TransportError>) -> Result<Notice, TransportError> {
        let notice = self.report(outcome)?;
        if self.notices.send(notice.clone()).is_err() {
            tracing::debug!("No notice listener for '{}'", notice);
        }
        Ok(notice)
    }
}
