//! Display models
//!
//! Typed, render-ready views built from backend responses. Views own no
//! markup: text and JSON rendering live in the `output` module, so every
//! transformation here can be tested without any UI.

mod notice;
mod search;
mod statistics;

pub use notice::{
    Notice, NoticeLevel, INDEXING_STARTED, INDEXING_STOPPED, PAGE_QUEUED, TRANSPORT_FAILURE,
};
pub use search::{format_relevance, Link, ResultEntry, SearchPanel, SearchResultsView};
pub use statistics::{IndexingState, SiteBlock, StatisticsPanel, StatisticsView, SummaryBlock};
