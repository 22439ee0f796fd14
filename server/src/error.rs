//! Error types for the to-do service.
//!
//! # Design
//! `InvalidId` is the only way the item list itself can fail. `AppError`
//! adds the request-level failure (`MalformedRequest`) and maps both to a
//! 400 with the message as a plain-text body. There is no server-side error
//! kind: the store cannot fail beyond these validation cases.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// An id that does not address an item in the current list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidId {
    #[error("id is less than 1")]
    TooLow { id: i64 },

    #[error("id ({id}) is more than the number of items ({len})")]
    TooHigh { id: i64, len: usize },
}

pub type AppResult<T> = Result<T, AppError>;

/// Errors surfaced to HTTP callers.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    InvalidId(#[from] InvalidId),

    /// The path or body could not be turned into an operation.
    #[error("{0}")]
    MalformedRequest(String),
}

impl AppError {
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedRequest(message.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}
