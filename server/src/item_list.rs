//! Ordered in-memory to-do list addressed by 1-based position.
//!
//! # Design
//! An item's id is its current position plus one, recomputed on every read.
//! Ids are therefore not stable: removing item 1 turns item 2 into item 1.
//! Ids travel as `i64` so that zero and negative values reach validation
//! instead of failing to parse.
//!
//! `ItemList` is a plain single-owner structure. `SharedItemList` wraps it
//! in an `Arc<RwLock<_>>` for the HTTP layer; each operation runs inside a
//! single guard, so no caller can observe a half-applied mutation.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::error::InvalidId;

/// An item paired with its current 1-based position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAndId {
    pub id: i64,
    pub item: String,
}

impl ItemAndId {
    fn at(index: usize, item: impl Into<String>) -> Self {
        Self {
            id: index as i64 + 1,
            item: item.into(),
        }
    }
}

/// Map a 1-based id onto a storage index for a list of `len` items.
pub fn validate_id(id: i64, len: usize) -> Result<usize, InvalidId> {
    if id < 1 {
        return Err(InvalidId::TooLow { id });
    }
    match usize::try_from(id) {
        Ok(position) if position <= len => Ok(position - 1),
        _ => Err(InvalidId::TooHigh { id, len }),
    }
}

#[derive(Debug, Default, Clone)]
pub struct ItemList {
    items: Vec<String>,
}

impl ItemList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append an item. Its id is the new length.
    pub fn create(&mut self, item: impl Into<String>) -> ItemAndId {
        let item = item.into();
        self.items.push(item.clone());
        ItemAndId::at(self.items.len() - 1, item)
    }

    pub fn read_one(&self, id: i64) -> Result<ItemAndId, InvalidId> {
        let index = validate_id(id, self.items.len())?;
        Ok(ItemAndId::at(index, self.items[index].as_str()))
    }

    pub fn read_all(&self) -> Vec<ItemAndId> {
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| ItemAndId::at(index, item.as_str()))
            .collect()
    }

    /// Replace the item at `id` in place. The list is untouched on error.
    pub fn update(&mut self, id: i64, item: impl Into<String>) -> Result<ItemAndId, InvalidId> {
        let index = validate_id(id, self.items.len())?;
        let item = item.into();
        self.items[index] = item.clone();
        Ok(ItemAndId::at(index, item))
    }

    /// Remove the item at `id`; every later item moves down one position.
    pub fn delete_one(&mut self, id: i64) -> Result<ItemAndId, InvalidId> {
        let index = validate_id(id, self.items.len())?;
        let removed = self.items.remove(index);
        Ok(ItemAndId::at(index, removed))
    }

    /// Empty the list, returning what it held.
    pub fn delete_all(&mut self) -> Vec<ItemAndId> {
        std::mem::take(&mut self.items)
            .into_iter()
            .enumerate()
            .map(|(index, item)| ItemAndId::at(index, item))
            .collect()
    }
}

/// Cloneable handle to one `ItemList` shared across request handlers.
///
/// Reads take the shared lock, mutations the exclusive one. The guard is
/// never held across an await point other than its own acquisition.
#[derive(Debug, Clone, Default)]
pub struct SharedItemList {
    inner: Arc<RwLock<ItemList>>,
}

impl SharedItemList {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn create(&self, item: String) -> ItemAndId {
        self.inner.write().await.create(item)
    }

    pub async fn read_one(&self, id: i64) -> Result<ItemAndId, InvalidId> {
        self.inner.read().await.read_one(id)
    }

    pub async fn read_all(&self) -> Vec<ItemAndId> {
        self.inner.read().await.read_all()
    }

    pub async fn update(&self, id: i64, item: String) -> Result<ItemAndId, InvalidId> {
        self.inner.write().await.update(id, item)
    }

    pub async fn delete_one(&self, id: i64) -> Result<ItemAndId, InvalidId> {
        self.inner.write().await.delete_one(id)
    }

    pub async fn delete_all(&self) -> Vec<ItemAndId> {
        self.inner.write().await.delete_all()
    }
}
