//! Category API Handlers

use axum::{
    extract::{Path, State},
    Json,
};

use crate::auth::AdminSession;
use crate::core::ServerState;
use crate::db::models::{Category, CategoryCreate, CategoryUpdate};
use crate::utils::{validation, AppError, AppResult};

/// GET /api/categories
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Category>>> {
    Ok(Json(state.repo.categories().await?))
}

/// POST /api/categories
pub async fn create(
    _session: AdminSession,
    State(state): State<ServerState>,
    Json(payload): Json<CategoryCreate>,
) -> AppResult<Json<Category>> {
    validation::check(&payload)?;
    let category = state.repo.create_category(payload).await?;
    tracing::info!(id = %category.id, name = %category.name, "Category created");
    Ok(Json(category))
}

/// PUT /api/categories/{id}
pub async fn update(
    _session: AdminSession,
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<CategoryUpdate>,
) -> AppResult<Json<Category>> {
    validation::check(&payload)?;
    let category = state
        .repo
        .update_category(&id, payload)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Category {id}")))?;
    Ok(Json(category))
}

/// DELETE /api/categories/{id} - products keep their category name
pub async fn delete(
    _session: AdminSession,
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    if !state.repo.delete_category(&id).await? {
        return Err(AppError::not_found(format!("Category {id}")));
    }
    Ok(Json(true))
}
