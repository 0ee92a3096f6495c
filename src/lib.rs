//! Search-Panel: an operator console for a crawling/search-indexing backend
//!
//! This crate drives a fixed set of backend HTTP endpoints to start and stop a
//! crawl, queue single pages for indexing, inspect indexing statistics, and run
//! searches, rendering every response into typed display models.

pub mod api;
pub mod config;
pub mod controller;
pub mod output;
pub mod panel;
pub mod view;

use thiserror::Error;

/// Main error type for Search-Panel operations
#[derive(Debug, Error)]
pub enum PanelError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Tab error: {0}")]
    Tab(#[from] controller::TabError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Search-Panel operations
pub type Result<T> = std::result::Result<T, PanelError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use api::{ApiClient, ApiResult, TransportError};
pub use config::Config;
pub use controller::{IndexingController, SearchController, StatisticsRenderer, TabController};
pub use panel::Panel;
pub use view::{Notice, NoticeLevel, SearchPanel, StatisticsPanel};
