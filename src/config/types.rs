use crate::{ConfigError, ConfigResult};
use serde::Deserialize;
use std::time::Duration;
use url::Url;

/// Default backend address of a locally running search engine
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/";

/// Tab whose activation triggers a statistics refresh
pub const DEFAULT_STATISTICS_TAB: &str = "dashboard";

/// Main configuration structure for Search-Panel
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub tabs: TabsConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

/// Backend connection configuration
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    /// Root URL the `/api/...` endpoints are resolved against
    #[serde(rename = "base-url", default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds; absent means requests may hang indefinitely
    #[serde(rename = "request-timeout", default)]
    pub request_timeout: Option<u64>,
}

/// Tab layout configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TabsConfig {
    /// Tab identifiers in display order
    #[serde(default = "default_tab_names")]
    pub names: Vec<String>,

    /// Tab active at startup (defaults to the first tab)
    #[serde(default)]
    pub initial: Option<String>,

    /// Tab whose activation refreshes statistics
    #[serde(default = "default_statistics_tab")]
    pub statistics: String,
}

/// Search request configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchConfig {
    /// Page size sent as `limit`; absent leaves it to the backend
    #[serde(default)]
    pub limit: Option<u32>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout: None,
        }
    }
}

impl Default for TabsConfig {
    fn default() -> Self {
        Self {
            names: default_tab_names(),
            initial: None,
            statistics: default_statistics_tab(),
        }
    }
}

impl BackendConfig {
    /// Parses the base URL, appending a trailing slash so endpoint paths join under it
    pub fn endpoint_base(&self) -> ConfigResult<Url> {
        let mut raw = self.base_url.trim().to_string();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        Url::parse(&raw)
            .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base-url '{}': {}", raw, e)))
    }

    /// Returns the configured timeout as a Duration
    pub fn timeout(&self) -> Option<Duration> {
        self.request_timeout.map(Duration::from_secs)
    }
}

impl TabsConfig {
    /// Returns the tab that is active when the panel loads
    pub fn initial_tab(&self) -> Option<&str> {
        self.initial
            .as_deref()
            .or_else(|| self.names.first().map(String::as_str))
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_tab_names() -> Vec<String> {
    ["dashboard", "management", "search"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_statistics_tab() -> String {
    DEFAULT_STATISTICS_TAB.to_string()
}
