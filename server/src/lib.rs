//! In-memory to-do list served over HTTP.
//!
//! # Overview
//! One `SharedItemList` is created by the caller and handed to the router as
//! state. Handlers in [`handlers`] translate routes into list operations and
//! answer with JSON, or plain text for the `GET /` listing.

pub mod config;
pub mod error;
pub mod handlers;
pub mod item_list;

use std::future::Future;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub use config::ServerConfig;
pub use error::{AppError, AppResult, InvalidId};
pub use handlers::ItemRequest;
pub use item_list::{ItemAndId, ItemList, SharedItemList};

/// Build the router around an existing list.
pub fn app(list: SharedItemList) -> Router {
    Router::new()
        .route("/", get(handlers::print_items))
        .route("/create", post(handlers::create_item))
        .route("/read", get(handlers::read_all))
        .route("/read/{id}", get(handlers::read_item))
        .route("/update/{id}", put(handlers::update_item))
        .route("/delete", delete(handlers::delete_all))
        .route("/delete/{id}", delete(handlers::delete_item))
        .layer(TraceLayer::new_for_http())
        .with_state(list)
}

/// Build the router around a fresh, empty list.
pub fn router() -> Router {
    app(SharedItemList::new())
}

pub async fn run(listener: TcpListener, list: SharedItemList) -> Result<(), std::io::Error> {
    axum::serve(listener, app(list)).await
}

/// Serve until `shutdown` resolves, then drain in-flight requests.
pub async fn run_until<F>(
    listener: TcpListener,
    list: SharedItemList,
    shutdown: F,
) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app(list))
        .with_graceful_shutdown(shutdown)
        .await
}
