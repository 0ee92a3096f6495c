//! Configuration module for Search-Panel
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every section is optional; a missing file section falls back to the defaults
//! that match the stock backend deployment.
//!
//! # Example
//!
//! ```no_run
//! use search_panel::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("panel.toml")).unwrap();
//! println!("Backend: {}", config.backend.base_url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{BackendConfig, Config, SearchConfig, TabsConfig};

// Re-export parser and validation functions
pub use parser::{load_config, parse_config};
pub use validation::validate;
