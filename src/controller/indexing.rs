//! Indexing actions
//!
//! Start, stop, and add-page are independent request/response/feedback
//! cycles. Application failures become failure notices carrying the backend
//! message verbatim; transport failures are returned to the caller.

use crate::api::{Acknowledged, ApiClient, ApiResult, TransportError};
use crate::view::{Notice, INDEXING_STARTED, INDEXING_STOPPED, PAGE_QUEUED};

/// The single-page URL input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageForm {
    pub url: String,
}

impl PageForm {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[derive(Debug, Clone)]
pub struct IndexingController {
    client: ApiClient,
}

impl IndexingController {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Starts a full crawl
    pub async fn start(&self) -> Result<Notice, TransportError> {
        tracing::info!("Requesting indexing start");
        let response = self.client.start_indexing().await?;
        Ok(feedback(response, INDEXING_STARTED))
    }

    /// Stops a running crawl
    pub async fn stop(&self) -> Result<Notice, TransportError> {
        tracing::info!("Requesting indexing stop");
        let response = self.client.stop_indexing().await?;
        Ok(feedback(response, INDEXING_STOPPED))
    }

    /// Queues the page in `form` for indexing, without validating the URL
    pub async fn index_page(&self, form: &PageForm) -> Result<Notice, TransportError> {
        tracing::info!("Requesting indexing of page '{}'", form.url);
        let response = self.client.index_page(&form.url).await?;
        Ok(feedback(response, PAGE_QUEUED))
    }
}

fn feedback(response: ApiResult<Acknowledged>, success: &str) -> Notice {
    match response {
        ApiResult::Success(_) => Notice::success(success),
        ApiResult::Failure(error) => {
            tracing::warn!("Backend rejected request: {}", error);
            Notice::failure(error)
        }
    }
}
