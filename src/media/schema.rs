//! Response schema validation.
//!
//! # Responsibilities
//! - Accept exactly the four known `status` shapes
//! - Require absolute URLs in `success`/`stream`/`redirect`
//! - Require a string `text` in `error`
//!
//! # Design Decisions
//! - The shape lives in the serde definition of `MediaResponse`;
//!   validation is deserialization, so there is one source of truth
//! - Unknown extra fields are ignored

use serde_json::Value;

use crate::media::types::{MediaResponse, SchemaError};

/// Validate a decoded body against the known response shapes.
pub fn validate(body: Value) -> Result<MediaResponse, SchemaError> {
    Ok(serde_json::from_value(body)?)
}

/// Validate a body that may only be the `error` shape.
///
/// Returns the error text.
pub fn validate_error(body: Value) -> Result<String, SchemaError> {
    match validate(body)? {
        MediaResponse::Error { text } => Ok(text),
        other => Err(SchemaError::UnexpectedStatus {
            expected: "error",
            found: other.status(),
        }),
    }
}
