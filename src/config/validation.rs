//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Endpoint URLs must be absolute http(s) URLs
//! - Timeouts must be non-zero
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ResolverConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is handed to the resolver

use thiserror::Error;
use url::Url;

use crate::config::schema::ResolverConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no endpoints configured")]
    NoEndpoints,

    #[error("endpoint #{index} ({url}) is not a valid absolute URL: {reason}")]
    InvalidEndpoint {
        index: usize,
        url: String,
        reason: String,
    },

    #[error("endpoint #{index} ({url}) uses unsupported scheme '{scheme}'")]
    UnsupportedScheme {
        index: usize,
        url: String,
        scheme: String,
    },

    #[error("timeout '{0}' must be greater than zero")]
    ZeroTimeout(&'static str),
}

/// Validate a parsed configuration, collecting every problem.
pub fn validate_config(config: &ResolverConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.endpoints.base_urls.is_empty() {
        errors.push(ValidationError::NoEndpoints);
    }

    for (index, raw) in config.endpoints.base_urls.iter().enumerate() {
        match Url::parse(raw) {
            Ok(url) => {
                if url.scheme() != "http" && url.scheme() != "https" {
                    errors.push(ValidationError::UnsupportedScheme {
                        index,
                        url: raw.clone(),
                        scheme: url.scheme().to_string(),
                    });
                }
            }
            Err(e) => errors.push(ValidationError::InvalidEndpoint {
                index,
                url: raw.clone(),
                reason: e.to_string(),
            }),
        }
    }

    if config.timeouts.connect_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("connect_secs"));
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("request_secs"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
