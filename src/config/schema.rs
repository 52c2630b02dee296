//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the resolver.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::validation::ValidationError;

/// Root configuration for the media resolver.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ResolverConfig {
    /// Ordered list of candidate backend endpoints.
    pub endpoints: EndpointsConfig,

    /// Transport timeout configuration.
    pub timeouts: TimeoutConfig,

    /// HTTP client identity.
    pub client: ClientConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl ResolverConfig {
    /// Parse the configured base URLs, preserving order.
    ///
    /// Fails on the first entry that is not an absolute URL; dropping it
    /// would shift every later endpoint's failover position.
    pub fn endpoint_urls(&self) -> Result<Vec<Url>, ValidationError> {
        self.endpoints
            .base_urls
            .iter()
            .enumerate()
            .map(|(index, raw)| {
                Url::parse(raw).map_err(|e| ValidationError::InvalidEndpoint {
                    index,
                    url: raw.clone(),
                    reason: e.to_string(),
                })
            })
            .collect()
    }
}

/// Endpoint list configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct EndpointsConfig {
    /// Base URLs in failover order (first = preferred).
    pub base_urls: Vec<String>,
}

/// Timeout configuration handed to the transport.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Connection establishment timeout in seconds.
    pub connect_secs: u64,

    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connect_secs: 5,
            request_secs: 30,
        }
    }
}

/// HTTP client configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientConfig {
    /// User-Agent header sent with every request.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!("media-resolver/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Record resolver counters through the `metrics` facade.
    pub metrics_enabled: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: true,
        }
    }
}
