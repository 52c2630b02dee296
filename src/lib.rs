//! Media download request resolver.
//!
//! Resolves a media URL against an ordered list of equivalent backend
//! endpoints, failing over on server errors and validating every response
//! against a closed set of shapes. Stream URLs are downloaded separately by
//! [`StreamFetcher`].

pub mod config;
pub mod media;
pub mod observability;
pub mod transport;

pub use config::ResolverConfig;
pub use media::{MediaError, MediaRequest, MediaResolver, MediaResponse, StreamFetcher, StreamResult};
pub use transport::{HttpTransport, Transport};
