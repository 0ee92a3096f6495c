//! Tab activation state machine
//!
//! Exactly one tab and its content panel are active at any time. Activating
//! the statistics tab fires a statistics refresh without waiting for it.

use crate::config::TabsConfig;
use crate::controller::statistics::StatisticsRenderer;
use crate::controller::{report_transport_failure, NoticeSender};
use thiserror::Error;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TabError {
    #[error("Unknown tab: {0}")]
    UnknownTab(String),

    #[error("No tabs configured")]
    NoTabs,

    #[error("Tab '{0}' refreshes statistics and needs a Tokio runtime")]
    NoRuntime(String),
}

/// The UI element that requested a tab switch (a tab button, a shortcut, ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TriggerElement(String);

impl TriggerElement {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn id(&self) -> &str {
        &self.0
    }
}

/// Activation flags of one tab
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabStatus {
    pub id: String,
    /// The tab header is highlighted
    pub active: bool,
    /// The content panel is shown
    pub panel_active: bool,
}

pub struct TabController {
    tabs: Vec<TabStatus>,
    active_trigger: Option<TriggerElement>,
    statistics_tab: String,
    statistics: StatisticsRenderer,
    notices: NoticeSender,
}

impl TabController {
    /// Creates the state machine with `initial` active
    ///
    /// # Arguments
    ///
    /// * `names` - Tab identifiers in display order
    /// * `initial` - Initially active tab; `None` selects the first
    /// * `statistics_tab` - Tab whose activation refreshes statistics
    /// * `statistics` - Renderer invoked on that activation
    /// * `notices` - Where refresh transport failures are reported
    pub fn new(
        names: &[String],
        initial: Option<&str>,
        statistics_tab: &str,
        statistics: StatisticsRenderer,
        notices: NoticeSender,
    ) -> Result<Self, TabError> {
        let initial = match initial {
            Some(name) => name,
            None => names.first().ok_or(TabError::NoTabs)?.as_str(),
        };

        if !names.iter().any(|n| n == initial) {
            return Err(TabError::UnknownTab(initial.to_string()));
        }

        let tabs = names
            .iter()
            .map(|name| TabStatus {
                id: name.clone(),
                active: name == initial,
                panel_active: name == initial,
            })
            .collect();

        Ok(Self {
            tabs,
            active_trigger: None,
            statistics_tab: statistics_tab.to_string(),
            statistics,
            notices,
        })
    }

    /// Creates the state machine from the `[tabs]` configuration section
    pub fn from_config(
        config: &TabsConfig,
        statistics: StatisticsRenderer,
        notices: NoticeSender,
    ) -> Result<Self, TabError> {
        Self::new(
            &config.names,
            config.initial_tab(),
            &config.statistics,
            statistics,
            notices,
        )
    }

    /// Activates `tab`, deactivating every other tab and panel
    ///
    /// `trigger` becomes the highlighted element. When `tab` is the statistics
    /// tab, a refresh is spawned on the current Tokio runtime and its handle
    /// returned; callers may ignore it.
    ///
    /// # Errors
    ///
    /// An unknown tab, or the statistics tab outside a Tokio runtime, is
    /// rejected and leaves the state unchanged.
    pub fn activate(
        &mut self,
        tab: &str,
        trigger: TriggerElement,
    ) -> Result<Option<JoinHandle<()>>, TabError> {
        if !self.tabs.iter().any(|t| t.id == tab) {
            return Err(TabError::UnknownTab(tab.to_string()));
        }

        let runtime = if tab == self.statistics_tab {
            let handle =
                Handle::try_current().map_err(|_| TabError::NoRuntime(tab.to_string()))?;
            Some(handle)
        } else {
            None
        };

        for status in &mut self.tabs {
            status.active = false;
            status.panel_active = false;
        }
        for status in self.tabs.iter_mut().filter(|t| t.id == tab) {
            status.active = true;
            status.panel_active = true;
        }
        self.active_trigger = Some(trigger);

        tracing::info!("Activated tab '{}'", tab);

        let Some(runtime) = runtime else {
            return Ok(None);
        };

        let statistics = self.statistics.clone();
        let notices = self.notices.clone();
        Ok(Some(runtime.spawn(async move {
            if let Err(e) = statistics.refresh().await {
                report_transport_failure(&notices, &e);
            }
        })))
    }

    /// Returns the identifier of the active tab
    pub fn active_tab(&self) -> &str {
        self.tabs
            .iter()
            .find(|t| t.active)
            .map(|t| t.id.as_str())
            .unwrap_or_default()
    }

    /// Returns the element that triggered the last activation
    pub fn active_trigger(&self) -> Option<&TriggerElement> {
        self.active_trigger.as_ref()
    }

    /// Returns the status of every tab in display order
    pub fn tabs(&self) -> &[TabStatus] {
        &self.tabs
    }
}
