//! Wire types returned by the backend
//!
//! Field names follow the backend's JSON (camelCase); optional fields tolerate
//! both absence and explicit `null`.

use serde::{Deserialize, Serialize};

/// A point-in-time copy of indexing statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsSnapshot {
    pub total: TotalStats,
    #[serde(default)]
    pub detailed: Vec<SiteStat>,
}

/// Aggregate counters over all configured sites
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TotalStats {
    pub sites: u64,
    pub pages: u64,
    pub lemmas: u64,
    /// True while a crawl is in progress
    pub indexing: bool,
}

/// Per-site indexing counters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteStat {
    pub name: String,
    pub url: String,
    /// Backend-defined status label (e.g. INDEXING, INDEXED, FAILED)
    pub status: String,
    /// Epoch seconds of the last status change
    #[serde(default)]
    pub status_time: Option<i64>,
    pub pages: u64,
    pub lemmas: u64,
    #[serde(default)]
    pub error: Option<String>,
}

/// Successful search payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    pub count: u64,
    #[serde(default)]
    pub data: Vec<SearchResultItem>,
}

/// One ranked search hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultItem {
    pub site: String,
    pub uri: String,
    pub title: String,
    pub snippet: String,
    pub relevance: f64,
}

/// Payload of an operation whose success carries no data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Acknowledged {}

/// The statistics endpoint nests its snapshot under `statistics`
#[derive(Debug, Deserialize)]
pub(crate) struct StatisticsPayload {
    pub statistics: StatisticsSnapshot,
}
