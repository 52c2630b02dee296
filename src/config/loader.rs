//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::ResolverConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable holding a comma-separated, ordered endpoint list.
pub const ENDPOINTS_ENV: &str = "API_BASE_URL";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
///
/// The `API_BASE_URL` environment variable, when set, replaces the file's
/// endpoint list before validation.
pub fn load_config(path: &Path) -> Result<ResolverConfig, ConfigError> {
    load_config_with_endpoints(path, std::env::var(ENDPOINTS_ENV).ok().as_deref())
}

/// Like [`load_config`], with the endpoint override passed in explicitly.
pub fn load_config_with_endpoints(
    path: &Path,
    endpoints: Option<&str>,
) -> Result<ResolverConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let mut config: ResolverConfig = toml::from_str(&content)?;

    apply_env_overrides(&mut config, endpoints);
    validate_config(&config).map_err(ConfigError::Validation)?;

    tracing::debug!(path = %path.display(), endpoints = config.endpoints.base_urls.len(), "Configuration loaded");
    Ok(config)
}

/// Build configuration from defaults plus the environment only.
pub fn load_from_env() -> Result<ResolverConfig, ConfigError> {
    let mut config = ResolverConfig::default();
    apply_env_overrides(&mut config, std::env::var(ENDPOINTS_ENV).ok().as_deref());
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Replace the endpoint list with a comma-separated value, if present.
///
/// Order is preserved; blank entries are dropped.
pub fn apply_env_overrides(config: &mut ResolverConfig, endpoints: Option<&str>) {
    let Some(raw) = endpoints else {
        return;
    };

    let urls: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect();

    tracing::debug!(count = urls.len(), "Endpoint list overridden from {}", ENDPOINTS_ENV);
    config.endpoints.base_urls = urls;
}
