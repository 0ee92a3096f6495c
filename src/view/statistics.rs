//! Statistics display model
//!
//! One summary block built from the totals, followed by one block per site in
//! the order the backend sent them.

use crate::api::{SiteStat, StatisticsSnapshot, TotalStats};
use chrono::{DateTime, Utc};
use serde::Serialize;

const IN_PROGRESS_LABEL: &str = "В процессе";
const COMPLETED_LABEL: &str = "Завершена";

/// Whether a crawl is currently running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexingState {
    InProgress,
    Completed,
}

impl IndexingState {
    pub fn from_flag(indexing: bool) -> Self {
        if indexing {
            Self::InProgress
        } else {
            Self::Completed
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::InProgress => IN_PROGRESS_LABEL,
            Self::Completed => COMPLETED_LABEL,
        }
    }
}

/// Aggregate counters block
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryBlock {
    pub sites: u64,
    pub pages: u64,
    pub lemmas: u64,
    pub indexing: IndexingState,
}

/// Per-site block
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteBlock {
    pub name: String,
    pub url: String,
    pub status: String,
    pub status_time: Option<DateTime<Utc>>,
    pub pages: u64,
    pub lemmas: u64,
    /// Present only for sites whose indexing failed
    pub error: Option<String>,
}

/// Rendered statistics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticsView {
    pub summary: SummaryBlock,
    pub sites: Vec<SiteBlock>,
}

/// Content of the statistics panel
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(tag = "state", content = "content", rename_all = "snake_case")]
pub enum StatisticsPanel {
    /// Nothing fetched yet
    #[default]
    Pending,
    Ready(StatisticsView),
    /// The backend answered `result: false`
    Failed(String),
}

impl From<&TotalStats> for SummaryBlock {
    fn from(total: &TotalStats) -> Self {
        Self {
            sites: total.sites,
            pages: total.pages,
            lemmas: total.lemmas,
            indexing: IndexingState::from_flag(total.indexing),
        }
    }
}

impl From<&SiteStat> for SiteBlock {
    fn from(site: &SiteStat) -> Self {
        Self {
            name: site.name.clone(),
            url: site.url.clone(),
            status: site.status.clone(),
            status_time: site
                .status_time
                .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0)),
            pages: site.pages,
            lemmas: site.lemmas,
            // An empty message counts as no error
            error: site.error.clone().filter(|e| !e.is_empty()),
        }
    }
}

impl From<&StatisticsSnapshot> for StatisticsView {
    fn from(snapshot: &StatisticsSnapshot) -> Self {
        Self {
            summary: SummaryBlock::from(&snapshot.total),
            sites: snapshot.detailed.iter().map(SiteBlock::from).collect(),
        }
    }
}

impl StatisticsPanel {
    pub fn view(&self) -> Option<&StatisticsView> {
        match self {
            Self::Ready(view) => Some(view),
            _ => None,
        }
    }
}
