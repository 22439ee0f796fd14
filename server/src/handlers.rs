//! Axum handlers translating routes into `SharedItemList` operations.

use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::item_list::{ItemAndId, SharedItemList};

/// Body of `POST /create` and `PUT /update/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemRequest {
    #[serde(default)]
    pub item: String,
}

pub async fn print_items(State(list): State<SharedItemList>) -> String {
    render_text(&list.read_all().await)
}

pub async fn read_all(State(list): State<SharedItemList>) -> Json<Vec<ItemAndId>> {
    Json(list.read_all().await)
}

pub async fn create_item(
    State(list): State<SharedItemList>,
    body: Bytes,
) -> AppResult<Json<ItemAndId>> {
    let item = item_text(&body)?;
    let created = list.create(item).await;
    debug!(id = created.id, "item created");
    Ok(Json(created))
}

pub async fn read_item(
    State(list): State<SharedItemList>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<ItemAndId>> {
    let id = parse_id(&raw_id)?;
    let item = list.read_one(id).await.inspect_err(|err| debug!(id, %err, "read rejected"))?;
    Ok(Json(item))
}

pub async fn update_item(
    State(list): State<SharedItemList>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> AppResult<Json<ItemAndId>> {
    let id = parse_id(&raw_id)?;
    let item = item_text(&body)?;
    let updated = list
        .update(id, item)
        .await
        .inspect_err(|err| debug!(id, %err, "update rejected"))?;
    debug!(id, "item updated");
    Ok(Json(updated))
}

pub async fn delete_item(
    State(list): State<SharedItemList>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<ItemAndId>> {
    let id = parse_id(&raw_id)?;
    let removed = list
        .delete_one(id)
        .await
        .inspect_err(|err| debug!(id, %err, "delete rejected"))?;
    debug!(id, "item deleted");
    Ok(Json(removed))
}

pub async fn delete_all(State(list): State<SharedItemList>) -> Json<Vec<ItemAndId>> {
    let removed = list.delete_all().await;
    debug!(count = removed.len(), "list cleared");
    Json(removed)
}

/// Numbered plain-text listing served at `GET /`.
pub fn render_text(items: &[ItemAndId]) -> String {
    let header = String::from("TO-DO LIST\n----------\n");
    if items.is_empty() {
        return header + "Looking kind of empty...\n";
    }
    items.iter().fold(header, |mut out, entry| {
        out.push_str(&format!("{}. {}\n", entry.id, entry.item));
        out
    })
}

fn parse_id(raw: &str) -> AppResult<i64> {
    raw.parse::<i64>()
        .map_err(|err| AppError::malformed(format!("error converting id to number: {err}")))
}

/// Decode `{"item": ...}` from the raw body. The content type is not checked.
fn item_text(body: &[u8]) -> AppResult<String> {
    let request: ItemRequest = serde_json::from_slice(body)
        .map_err(|err| AppError::malformed(format!("invalid request body: {err}")))?;
    if request.item.is_empty() {
        return Err(AppError::malformed("item field in body was not populated"));
    }
    Ok(request.item)
}
