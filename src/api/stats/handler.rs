//! Stats Handler

use axum::{extract::State, Json};

use crate::auth::AdminSession;
use crate::core::ServerState;
use crate::db::repository::CatalogStats;
use crate::utils::AppResult;

/// GET /api/stats - per-category product counts and stock split
pub async fn stats(
    _session: AdminSession,
    State(state): State<ServerState>,
) -> AppResult<Json<CatalogStats>> {
    Ok(Json(state.repo.stats().await?))
}
