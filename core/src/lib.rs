//! Synchronous client core for the to-do list service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network. The caller executes the HTTP round-trip.
//!
//! # Design
//! - `TodoClient` holds only `base_url`.
//! - Each route has a `build_*` method producing the request and a
//!   `parse_*` method consuming the response.
//! - DTOs are defined independently from the server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::TodoClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{ItemAndId, ItemRequest};
