//! Direct stream fetching.
//!
//! # Responsibilities
//! - Single GET to a resolved direct URL, no retry
//! - Non-2xx: the body must be an `error` response
//! - 2xx: buffer the whole body, take the filename from `Content-Disposition`

use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::header::{HeaderMap, CONTENT_DISPOSITION};

use crate::media::schema;
use crate::media::types::{MediaError, MediaResult, StreamResult};
use crate::observability::metrics;
use crate::transport::{Transport, TransportRequest};

/// Only the plain quoted form; `filename*=` is not recognised.
static FILENAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"filename="([^"]+)""#).unwrap_or_else(|e| {
        panic!("Invalid filename regex pattern - this indicates a programming error: {}", e)
    })
});

/// Fetches stream URLs returned by the resolver.
#[derive(Debug, Clone)]
pub struct StreamFetcher<T> {
    transport: T,
}

impl<T: Transport> StreamFetcher<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Download `url` into memory.
    pub async fn fetch_stream(&self, url: &str) -> MediaResult<StreamResult> {
        tracing::debug!(url = %url, "Fetching stream");

        let response = self.transport.send(TransportRequest::get(url)).await?;

        if !response.status.is_success() {
            let body = response.json().map_err(MediaError::Json)?;
            let text = schema::validate_error(body)?;

            tracing::warn!(url = %url, status = %response.status, text = %text, "Stream fetch failed");
            metrics::record_stream_fetch("error");
            return Ok(StreamResult::Error { text });
        }

        let filename = filename_from_headers(&response.headers);
        tracing::info!(
            url = %url,
            bytes = response.body.len(),
            filename = filename.as_deref().unwrap_or("-"),
            "Stream fetched"
        );
        metrics::record_stream_fetch("success");

        Ok(StreamResult::Success {
            buffer: response.body,
            filename,
        })
    }
}

fn filename_from_headers(headers: &HeaderMap) -> Option<String> {
    // `to_str` rejects non-ASCII bytes, which UTF-8 filenames carry.
    let value = headers.get(CONTENT_DISPOSITION)?;
    extract_filename(&String::from_utf8_lossy(value.as_bytes()))
}

/// Pull `name` out of `...filename="name"...`.
pub fn extract_filename(content_disposition: &str) -> Option<String> {
    FILENAME_PATTERN
        .captures(content_disposition)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
