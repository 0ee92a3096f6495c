//! Statistics refresh pipeline

use crate::api::{ApiClient, ApiResult, TransportError};
use crate::controller::gate::{RenderOutcome, RequestGate};
use crate::view::{StatisticsPanel, StatisticsView};
use std::sync::Arc;
use tokio::sync::watch;

/// Fetches statistics snapshots and publishes them to the statistics panel
///
/// Clones share the same gate and panel, so a refresh started from a tab
/// switch and a manual refresh supersede each other.
#[derive(Debug, Clone)]
pub struct StatisticsRenderer {
    client: ApiClient,
    gate: RequestGate,
    panel: Arc<watch::Sender<StatisticsPanel>>,
}

impl StatisticsRenderer {
    pub fn new(client: ApiClient) -> Self {
        let (panel, _) = watch::channel(StatisticsPanel::Pending);
        Self {
            client,
            gate: RequestGate::new(),
            panel: Arc::new(panel),
        }
    }

    /// Subscribes to panel updates
    pub fn subscribe(&self) -> watch::Receiver<StatisticsPanel> {
        self.panel.subscribe()
    }

    /// Returns the currently displayed panel
    pub fn current(&self) -> StatisticsPanel {
        self.panel.borrow().clone()
    }

    /// Fetches a fresh snapshot and replaces the panel content
    ///
    /// Transport failures leave the panel untouched and are returned to the
    /// caller for the generic failure path.
    pub async fn refresh(&self) -> Result<RenderOutcome, TransportError> {
        let token = self.gate.issue();
        tracing::debug!("Refreshing statistics");

        let panel = match self.client.get_statistics().await? {
            ApiResult::Success(snapshot) => {
                tracing::info!(
                    "Statistics: {} sites, {} pages, {} lemmas",
                    snapshot.total.sites,
                    snapshot.total.pages,
                    snapshot.total.lemmas
                );
                StatisticsPanel::Ready(StatisticsView::from(&snapshot))
            }
            ApiResult::Failure(error) => {
                tracing::warn!("Statistics request rejected: {}", error);
                StatisticsPanel::Failed(error)
            }
        };

        Ok(self.gate.publish(token, &self.panel, panel))
    }
}
