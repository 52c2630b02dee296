//! Endpoint failover resolver.
//!
//! # Responsibilities
//! - POST the media request to `{endpoint}/json` for the next untried endpoint
//! - Treat any status >= 500 as "try the next endpoint", recording it
//! - Hand every other response to the schema validator and return the result
//!
//! # Design Decisions
//! - Endpoints are tried strictly in configured order; the failure history
//!   length is the index of the next one
//! - 4xx answers, transport errors and `error` bodies are never retried
//! - No backoff between attempts; the loop is bounded by the endpoint count

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CONTENT_TYPE};
use tracing::Instrument;
use url::Url;
use uuid::Uuid;

use crate::media::schema;
use crate::media::types::{
    FailureHistory, MediaError, MediaRequest, MediaResponse, MediaResult, RequestPayload,
};
use crate::observability::metrics;
use crate::transport::{Transport, TransportRequest};

/// Resolves media requests against an ordered list of equivalent endpoints.
#[derive(Debug, Clone)]
pub struct MediaResolver<T> {
    endpoints: Vec<Url>,
    transport: T,
}

impl<T: Transport> MediaResolver<T> {
    /// Create a resolver over `endpoints` (first = preferred).
    pub fn new(endpoints: Vec<Url>, transport: T) -> Self {
        Self {
            endpoints,
            transport,
        }
    }

    /// Configured endpoints, in failover order.
    pub fn endpoints(&self) -> &[Url] {
        &self.endpoints
    }

    /// Resolve `request`, starting from the first endpoint.
    pub async fn resolve(&self, request: &MediaRequest) -> MediaResult<MediaResponse> {
        self.resolve_with_history(request, FailureHistory::new()).await
    }

    /// Resolve `request`, skipping the endpoints already accounted for in `history`.
    pub async fn resolve_with_history(
        &self,
        request: &MediaRequest,
        history: FailureHistory,
    ) -> MediaResult<MediaResponse> {
        let resolve_id = Uuid::new_v4();
        let span = tracing::info_span!("resolve", %resolve_id, url = %request.url);
        self.run(request, history).instrument(span).await
    }

    async fn run(&self, request: &MediaRequest, mut history: FailureHistory) -> MediaResult<MediaResponse> {
        let headers = request_headers(request)?;
        let payload = serde_json::to_vec(&RequestPayload::from(request)).map_err(MediaError::Json)?;

        let resumed_at = history.len();
        let mut sent = 0;

        loop {
            // Every request sent so far failed with exactly one recorded status.
            debug_assert_eq!(history.next_index(), resumed_at + sent);

            let Some(endpoint) = history.next_endpoint(&self.endpoints) else {
                tracing::error!(
                    endpoints = self.endpoints.len(),
                    history = %history,
                    "All endpoints failed"
                );
                metrics::record_exhausted();
                return Err(MediaError::Exhausted { history });
            };
            let attempt = history.next_index();
            let target = json_endpoint(endpoint);

            tracing::debug!(attempt, endpoint = %target, "Requesting media");
            metrics::record_attempt(endpoint);

            let response = self
                .transport
                .send(TransportRequest::post(target.clone(), headers.clone(), payload.clone()))
                .await?;
            sent += 1;

            let status = response.status.as_u16();
            if status >= 500 {
                tracing::warn!(attempt, endpoint = %target, status, "Server error, trying next endpoint");
                metrics::record_server_error(endpoint, status);
                history.push(status);
                continue;
            }

            let body = response.json().map_err(MediaError::Json)?;
            let media = schema::validate(body)?;

            tracing::info!(attempt, endpoint = %target, status, kind = media.status(), "Media resolved");
            return Ok(media);
        }
    }
}

/// `{endpoint}/json`, without doubling a trailing slash.
fn json_endpoint(endpoint: &Url) -> String {
    format!("{}/json", endpoint.as_str().trim_end_matches('/'))
}

fn request_headers(request: &MediaRequest) -> MediaResult<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    if let Some(lang) = request.lang.as_deref().filter(|l| !l.is_empty()) {
        let value = HeaderValue::from_str(lang).map_err(|_| MediaError::InvalidHeader {
            name: "Accept-Language",
            value: lang.to_string(),
        })?;
        headers.insert(ACCEPT_LANGUAGE, value);
    }

    Ok(headers)
}
