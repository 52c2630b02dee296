//! Media request/response types and error definitions.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::transport::TransportError;

/// What the caller wants resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaRequest {
    /// Target media page URL.
    pub url: String,
    /// Optional `Accept-Language` tag.
    pub lang: Option<String>,
    /// Request the audio track only.
    pub audio_only: bool,
}

impl MediaRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            lang: None,
            audio_only: false,
        }
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    pub fn audio_only(mut self, audio_only: bool) -> Self {
        self.audio_only = audio_only;
        self
    }
}

/// JSON body POSTed to `{endpoint}/json`.
///
/// Only `url` and `isAudioOnly` vary; the rest is fixed policy.
#[derive(Debug, Clone, Serialize)]
pub struct RequestPayload<'a> {
    pub url: &'a str,
    #[serde(rename = "isAudioOnly")]
    pub is_audio_only: bool,
    #[serde(rename = "filenamePattern")]
    pub filename_pattern: &'static str,
    #[serde(rename = "isNoTTWatermark")]
    pub is_no_tt_watermark: bool,
}

impl<'a> From<&'a MediaRequest> for RequestPayload<'a> {
    fn from(request: &'a MediaRequest) -> Self {
        Self {
            url: &request.url,
            is_audio_only: request.audio_only,
            filename_pattern: "basic",
            is_no_tt_watermark: true,
        }
    }
}

/// Validated backend response, discriminated by `status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum MediaResponse {
    /// Final direct media URL.
    Success { url: Url },
    /// URL the caller must fetch through the stream fetcher.
    Stream { url: Url },
    /// Upstream redirect target.
    Redirect { url: Url },
    /// Application-level failure; a value, not an `Err`.
    Error { text: String },
}

impl MediaResponse {
    /// The `status` tag as it appears on the wire.
    pub fn status(&self) -> &'static str {
        match self {
            MediaResponse::Success { .. } => "success",
            MediaResponse::Stream { .. } => "stream",
            MediaResponse::Redirect { .. } => "redirect",
            MediaResponse::Error { .. } => "error",
        }
    }
}

/// Outcome of a direct stream download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamResult {
    Success {
        buffer: Vec<u8>,
        filename: Option<String>,
    },
    Error {
        text: String,
    },
}

/// Status codes of failed attempts, in attempt order.
///
/// The length doubles as the index of the next endpoint to try.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FailureHistory(Vec<u16>);

impl FailureHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failed attempt.
    pub fn push(&mut self, status: u16) {
        self.0.push(status);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn statuses(&self) -> &[u16] {
        &self.0
    }

    /// Index of the next untried endpoint.
    pub fn next_index(&self) -> usize {
        self.0.len()
    }

    /// The next untried endpoint, or `None` once every endpoint has failed.
    pub fn next_endpoint<'e>(&self, endpoints: &'e [Url]) -> Option<&'e Url> {
        endpoints.get(self.next_index())
    }
}

impl From<Vec<u16>> for FailureHistory {
    fn from(statuses: Vec<u16>) -> Self {
        Self(statuses)
    }
}

impl fmt::Display for FailureHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, status) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", status)?;
        }
        write!(f, "]")
    }
}

/// Body did not match any known response shape.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Unknown status, missing field, wrong type or invalid URL.
    #[error("response does not match any known shape: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Well-formed, but not the variant this call site accepts.
    #[error("expected status '{expected}', got '{found}'")]
    UnexpectedStatus {
        expected: &'static str,
        found: &'static str,
    },
}

/// Errors that end a resolution or stream fetch.
#[derive(Debug, Error)]
pub enum MediaError {
    /// Network failure; never retried.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Every endpoint answered with a server error.
    #[error("all endpoints failed with statuses {history}")]
    Exhausted { history: FailureHistory },

    /// Payload could not be encoded, or a response body was not JSON.
    #[error("JSON error: {0}")]
    Json(serde_json::Error),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// Caller-supplied header value cannot be sent.
    #[error("invalid value for header {name}: {value:?}")]
    InvalidHeader { name: &'static str, value: String },
}

/// Result type for media operations.
pub type MediaResult<T> = Result<T, MediaError>;
