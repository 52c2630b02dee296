//! Transport subsystem.
//!
//! # Data Flow
//! ```text
//! resolver / stream fetcher
//!     → TransportRequest (method, url, headers, body)
//!     → Transport::send (client.rs: reqwest)
//!     → TransportResponse (status, headers, buffered body)
//! ```
//!
//! # Design Decisions
//! - The transport is a black box: no retries, no status interpretation
//! - Timeouts live here, never in the resolver
//! - Redirect following is whatever the client does by default

use std::future::Future;

pub mod client;
pub mod types;

#[cfg(test)]
pub(crate) mod scripted;

pub use client::HttpTransport;
pub use types::{TransportError, TransportRequest, TransportResponse};

/// A request/response primitive.
pub trait Transport: Send + Sync {
    /// Perform one request and buffer its response.
    fn send(
        &self,
        request: TransportRequest,
    ) -> impl Future<Output = Result<TransportResponse, TransportError>> + Send;
}

impl<T: Transport> Transport for &T {
    fn send(
        &self,
        request: TransportRequest,
    ) -> impl Future<Output = Result<TransportResponse, TransportError>> + Send {
        (**self).send(request)
    }
}
