//! Errors returned by `TodoClient` build and parse methods.
//!
//! # Design
//! The server reports every caller mistake (bad id, missing item, bad JSON)
//! as a 400 with a plain-text message, so that case gets its own variant
//! carrying the message. Any other unexpected status lands in `HttpError`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The server rejected the request with 400.
    #[error("invalid request: {message}")]
    InvalidRequest { message: String },

    /// The server returned a status other than 200 or 400.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    #[error("serialization failed: {0}")]
    SerializationError(String),
}
