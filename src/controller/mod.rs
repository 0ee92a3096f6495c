//! Controller module
//!
//! This module contains the orchestration layer between user actions and the
//! backend:
//! - Tab activation state machine with the statistics side effect
//! - Statistics and search pipelines publishing display models
//! - Indexing actions producing feedback notices
//! - Request gating that discards superseded responses

mod gate;
mod indexing;
mod search;
mod statistics;
mod tabs;

pub use gate::{RenderOutcome, RequestGate, RequestToken};
pub use indexing::{IndexingController, PageForm};
pub use search::{SearchController, SearchForm};
pub use statistics::StatisticsRenderer;
pub use tabs::{TabController, TabError, TabStatus, TriggerElement};

use crate::api::TransportError;
use crate::view::Notice;
use tokio::sync::mpsc;

/// Channel carrying notices to whoever displays them
pub type NoticeSender = mpsc::UnboundedSender<Notice>;

/// Routes a transport failure to the generic failure notice
pub fn report_transport_failure(notices: &NoticeSender, error: &TransportError) {
    tracing::error!("Backend request failed: {}", error);
    if notices.send(Notice::transport_failure()).is_err() {
        tracing::debug!("No notice listener for transport failure");
    }
}
