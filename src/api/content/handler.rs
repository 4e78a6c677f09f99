//! Page Content Handlers
//!
//! Content blobs are schemaless JSON keyed by a fixed set of page
//! names. A PATCH replaces the supplied top-level keys and leaves the
//! rest of the blob alone.

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;

use crate::auth::AdminSession;
use crate::core::ServerState;
use crate::db::models::PageKey;
use crate::utils::{AppError, AppResult};

fn parse_page(raw: &str) -> Result<PageKey, AppError> {
    PageKey::parse(raw).ok_or_else(|| AppError::validation(format!("Unknown content page: {raw}")))
}

/// GET /api/content/{page} - `{}` for a page never written
pub async fn get_page(
    State(state): State<ServerState>,
    Path(page): Path<String>,
) -> AppResult<Json<Value>> {
    let page = parse_page(&page)?;
    Ok(Json(state.repo.page_content(page).await?))
}

/// PATCH /api/content/{page} - merge top-level keys, return the result
pub async fn update_page(
    _session: AdminSession,
    State(state): State<ServerState>,
    Path(page): Path<String>,
    Json(patch): Json<Value>,
) -> AppResult<Json<Value>> {
    let page = parse_page(&page)?;
    if !patch.is_object() {
        return Err(AppError::validation("Content patch must be a JSON object"));
    }
    let merged = state.repo.update_page_content(page, patch).await?;
    tracing::info!(page = page.as_str(), "Page content updated");
    Ok(Json(merged))
}
