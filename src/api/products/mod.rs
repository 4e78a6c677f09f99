//! Product API module

mod handler;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/products", product_routes())
}

fn product_routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{id}", axum::routing::put(handler::update).delete(handler::delete))
        .route("/slug/{slug}", get(handler::get_by_slug))
        .route("/bulk-delete", post(handler::bulk_delete))
        .route("/by-category/{name}", delete(handler::delete_by_category))
}
