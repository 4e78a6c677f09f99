//! Page content API module

mod handler;

use axum::{routing::get, Router};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest(
        "/api/content",
        Router::new().route("/{page}", get(handler::get_page).patch(handler::update_page)),
    )
}
