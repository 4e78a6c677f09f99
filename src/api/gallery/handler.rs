//! Gallery API Handlers

use axum::{
    extract::{Path, State},
    Json,
};

use crate::auth::AdminSession;
use crate::core::ServerState;
use crate::db::models::{GalleryItem, GalleryItemCreate, GalleryItemUpdate};
use crate::utils::{validation, AppError, AppResult};

/// GET /api/gallery - ordered by displayOrder
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<GalleryItem>>> {
    Ok(Json(state.repo.gallery_items().await?))
}

/// POST /api/gallery
pub async fn create(
    _session: AdminSession,
    State(state): State<ServerState>,
    Json(payload): Json<GalleryItemCreate>,
) -> AppResult<Json<GalleryItem>> {
    validation::check(&payload)?;
    Ok(Json(state.repo.create_gallery_item(payload).await?))
}

/// PUT /api/gallery/{id}
pub async fn update(
    _session: AdminSession,
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<GalleryItemUpdate>,
) -> AppResult<Json<GalleryItem>> {
    validation::check(&payload)?;
    let item = state
        .repo
        .update_gallery_item(&id, payload)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Gallery item {id}")))?;
    Ok(Json(item))
}

/// DELETE /api/gallery/{id}
pub async fn delete(
    _session: AdminSession,
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    if !state.repo.delete_gallery_item(&id).await? {
        return Err(AppError::not_found(format!("Gallery item {id}")));
    }
    Ok(Json(true))
}
