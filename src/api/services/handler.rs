//! Service API Handlers

use axum::{
    extract::{Path, State},
    Json,
};

use crate::auth::AdminSession;
use crate::core::ServerState;
use crate::db::models::{Service, ServiceCreate, ServiceUpdate};
use crate::utils::{validation, AppError, AppResult};

/// GET /api/services
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Service>>> {
    Ok(Json(state.repo.services().await?))
}

/// POST /api/services
pub async fn create(
    _session: AdminSession,
    State(state): State<ServerState>,
    Json(payload): Json<ServiceCreate>,
) -> AppResult<Json<Service>> {
    validation::check(&payload)?;
    let service = state.repo.create_service(payload).await?;
    tracing::info!(id = %service.id, slug = %service.slug, "Service created");
    Ok(Json(service))
}

/// PUT /api/services/{id}
pub async fn update(
    _session: AdminSession,
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ServiceUpdate>,
) -> AppResult<Json<Service>> {
    validation::check(&payload)?;
    let service = state
        .repo
        .update_service(&id, payload)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Service {id}")))?;
    Ok(Json(service))
}

/// DELETE /api/services/{id}
pub async fn delete(
    _session: AdminSession,
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    if !state.repo.delete_service(&id).await? {
        return Err(AppError::not_found(format!("Service {id}")));
    }
    Ok(Json(true))
}
