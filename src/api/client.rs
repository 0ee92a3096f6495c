//! HTTP client for the backend API
//!
//! One method per backend operation. Each issues exactly one request: no
//! retries and no de-duplication. A timeout applies only when one is configured.

use crate::api::envelope::{decode_envelope, ApiResult};
use crate::api::types::{Acknowledged, SearchResults, StatisticsPayload, StatisticsSnapshot};
use crate::api::TransportError;
use crate::config::BackendConfig;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

const STATISTICS_PATH: &str = "api/statistics";
const START_INDEXING_PATH: &str = "api/startIndexing";
const STOP_INDEXING_PATH: &str = "api/stopIndexing";
const INDEX_PAGE_PATH: &str = "api/indexPage";
const SEARCH_PATH: &str = "api/search";

/// Optional paging for search requests
///
/// Unset fields are not sent, leaving the backend defaults (offset 0, limit 20).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

/// Client for the five backend endpoints
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base: Url,
}

impl ApiClient {
    /// Builds a client rooted at `base`
    ///
    /// # Arguments
    ///
    /// * `base` - Backend root; endpoint paths are joined under it
    /// * `timeout` - Optional per-request timeout
    ///
    /// # Example
    ///
    /// ```no_run
    /// use search_panel::api::ApiClient;
    /// use url::Url;
    ///
    /// let client = ApiClient::new(Url::parse("http://localhost:8080/").unwrap(), None).unwrap();
    /// ```
    pub fn new(base: Url, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder()
            .user_agent(format!("search-panel/{}", env!("CARGO_PKG_VERSION")))
            .gzip(true)
            .brotli(true);

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base,
        })
    }

    /// Builds a client from the `[backend]` configuration section
    pub fn from_config(config: &BackendConfig) -> crate::Result<Self> {
        let base = config.endpoint_base()?;
        Ok(Self::new(base, config.timeout())?)
    }

    /// Returns the backend root URL
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// `GET /api/statistics`
    pub async fn get_statistics(&self) -> Result<ApiResult<StatisticsSnapshot>, TransportError> {
        let url = self.endpoint(STATISTICS_PATH)?;
        let payload: ApiResult<StatisticsPayload> = self.send(Method::GET, url).await?;
        Ok(payload.map(|p| p.statistics))
    }

    /// `GET /api/startIndexing`
    pub async fn start_indexing(&self) -> Result<ApiResult<Acknowledged>, TransportError> {
        let url = self.endpoint(START_INDEXING_PATH)?;
        self.send(Method::GET, url).await
    }

    /// `GET /api/stopIndexing`
    pub async fn stop_indexing(&self) -> Result<ApiResult<Acknowledged>, TransportError> {
        let url = self.endpoint(STOP_INDEXING_PATH)?;
        self.send(Method::GET, url).await
    }

    /// `POST /api/indexPage?url=...`
    ///
    /// The page URL is sent as-is (percent-encoded); any rejection comes back
    /// as the backend's error message.
    pub async fn index_page(&self, page_url: &str) -> Result<ApiResult<Acknowledged>, TransportError> {
        let mut url = self.endpoint(INDEX_PAGE_PATH)?;
        url.query_pairs_mut().append_pair("url", page_url);
        self.send(Method::POST, url).await
    }

    /// `GET /api/search?query=...[&site=...]`
    ///
    /// An empty or absent `site` is omitted from the request entirely.
    pub async fn search(
        &self,
        query: &str,
        site: Option<&str>,
    ) -> Result<ApiResult<SearchResults>, TransportError> {
        self.search_page(query, site, Pagination::default()).await
    }

    /// Like [`ApiClient::search`], with explicit `offset`/`limit` paging
    pub async fn search_page(
        &self,
        query: &str,
        site: Option<&str>,
        page: Pagination,
    ) -> Result<ApiResult<SearchResults>, TransportError> {
        let mut url = self.endpoint(SEARCH_PATH)?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("query", query);
            if let Some(site) = site.filter(|s| !s.is_empty()) {
                pairs.append_pair("site", site);
            }
            if let Some(offset) = page.offset {
                pairs.append_pair("offset", &offset.to_string());
            }
            if let Some(limit) = page.limit {
                pairs.append_pair("limit", &limit.to_string());
            }
        }
        self.send(Method::GET, url).await
    }

    fn endpoint(&self, path: &str) -> Result<Url, TransportError> {
        Ok(self.base.join(path)?)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
    ) -> Result<ApiResult<T>, TransportError> {
        let endpoint = url.path().to_string();
        tracing::debug!("{} {}", method, url);

        let response = self
            .http
            .request(method, url)
            .send()
            .await
            .map_err(|source| TransportError::Request {
                endpoint: endpoint.clone(),
                source,
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|source| TransportError::Request {
                endpoint: endpoint.clone(),
                source,
            })?;

        let decoded = decode_envelope(&endpoint, status.as_u16(), &body)?;
        match &decoded {
            ApiResult::Success(_) => tracing::debug!("{} -> HTTP {} ok", endpoint, status),
            ApiResult::Failure(error) => {
                tracing::debug!("{} -> HTTP {} failure: {}", endpoint, status, error)
            }
        }
        Ok(decoded)
    }
}
