//! Media resolution subsystem.
//!
//! # Data Flow
//! ```text
//! MediaRequest
//!     → resolver.rs (POST {endpoint}/json, next endpoint on 5xx)
//!     → schema.rs (success | stream | redirect | error)
//!     → MediaResponse
//!
//! stream URL (from a `stream` response)
//!     → stream.rs (single GET, filename from Content-Disposition)
//!     → StreamResult
//! ```
//!
//! # Design Decisions
//! - An `error` body is a normal return value; only transport failures,
//!   exhaustion and shape mismatches are `Err`
//! - Nothing is cached or shared between calls

pub mod resolver;
pub mod schema;
pub mod stream;
pub mod types;

pub use resolver::MediaResolver;
pub use schema::{validate, validate_error};
pub use stream::{extract_filename, StreamFetcher};
pub use types::{
    FailureHistory, MediaError, MediaRequest, MediaResponse, MediaResult, RequestPayload,
    SchemaError, StreamResult,
};
