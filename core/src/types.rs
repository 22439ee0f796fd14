//! Wire DTOs for the to-do API.
//!
//! # Design
//! Mirrors the server's JSON shapes without depending on the server crate.
//! The integration test catches any drift between the two.

use serde::{Deserialize, Serialize};

/// An item with its position at the time the server answered.
///
/// `id` is not durable: deleting an earlier item shifts every later id down.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAndId {
    pub id: i64,
    pub item: String,
}

/// Payload for create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRequest {
    pub item: String,
}

impl ItemRequest {
    pub fn new(item: impl Into<String>) -> Self {
        Self { item: item.into() }
    }
}
