use crate::config::types::{BackendConfig, Config, SearchConfig, TabsConfig};
use crate::{ConfigError, ConfigResult};
use std::collections::HashSet;

/// Validates the entire configuration
pub fn validate(config: &Config) -> ConfigResult<()> {
    validate_backend_config(&config.backend)?;
    validate_tabs_config(&config.tabs)?;
    validate_search_config(&config.search)?;
    Ok(())
}

/// Validates backend configuration
fn validate_backend_config(config: &BackendConfig) -> ConfigResult<()> {
    let base = config.endpoint_base()?;

    if base.scheme() != "http" && base.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "base-url must use http or https, got '{}'",
            base.scheme()
        )));
    }

    if base.host_str().is_none() {
        return Err(ConfigError::InvalidUrl(format!(
            "base-url '{}' has no host",
            config.base_url
        )));
    }

    if config.request_timeout == Some(0) {
        return Err(ConfigError::Validation(
            "request-timeout must be >= 1 second".to_string(),
        ));
    }

    Ok(())
}

/// Validates tab layout configuration
fn validate_tabs_config(config: &TabsConfig) -> ConfigResult<()> {
    if config.names.is_empty() {
        return Err(ConfigError::Validation(
            "tabs.names must contain at least one tab".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for name in &config.names {
        if name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "tab names cannot be empty".to_string(),
            ));
        }
        if !seen.insert(name.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate tab name '{}'",
                name
            )));
        }
    }

    if let Some(initial) = &config.initial {
        if !seen.contains(initial.as_str()) {
            return Err(ConfigError::Validation(format!(
                "initial tab '{}' is not one of {:?}",
                initial, config.names
            )));
        }
    }

    if !seen.contains(config.statistics.as_str()) {
        return Err(ConfigError::Validation(format!(
            "statistics tab '{}' is not one of {:?}",
            config.statistics, config.names
        )));
    }

    Ok(())
}

/// Validates search configuration
fn validate_search_config(config: &SearchConfig) -> ConfigResult<()> {
    if config.limit == Some(0) {
        return Err(ConfigError::Validation(
            "search.limit must be >= 1".to_string(),
        ));
    }
    Ok(())
}
