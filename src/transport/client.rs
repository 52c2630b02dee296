//! reqwest-backed transport.
//!
//! # Responsibilities
//! - Own the pooled HTTP client
//! - Apply connect/request timeouts and the user agent from config
//! - Buffer the whole response body before handing it back

use std::future::Future;
use std::time::Duration;

use reqwest::Client;

use crate::config::{ClientConfig, TimeoutConfig};
use crate::transport::types::{TransportError, TransportRequest, TransportResponse};
use crate::transport::Transport;

/// HTTP transport over a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Build a transport from timeout and client settings.
    pub fn new(timeouts: &TimeoutConfig, client: &ClientConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .timeout(Duration::from_secs(timeouts.request_secs))
            .user_agent(client.user_agent.clone())
            .build()?;

        Ok(Self { client })
    }

    /// Wrap an existing client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    fn send(
        &self,
        request: TransportRequest,
    ) -> impl Future<Output = Result<TransportResponse, TransportError>> + Send {
        async move {
            let mut builder = self
                .client
                .request(request.method, &request.url)
                .headers(request.headers);
            if let Some(body) = request.body {
                builder = builder.body(body);
            }

            let response = builder.send().await?;
            let status = response.status();
            let headers = response.headers().clone();
            // A server error is reported by status alone; its body may be cut short.
            let body = match response.bytes().await {
                Ok(bytes) => bytes.to_vec(),
                Err(e) if status.is_server_error() => {
                    tracing::debug!(url = %request.url, status = %status, error = %e, "Discarding unreadable server error body");
                    Vec::new()
                }
                Err(e) => return Err(e.into()),
            };

            tracing::trace!(url = %request.url, status = %status, bytes = body.len(), "Transport response");

            Ok(TransportResponse { status, headers, body })
        }
    }
}
