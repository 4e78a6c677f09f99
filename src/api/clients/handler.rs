//! Client API Handlers

use axum::{
    extract::{Path, State},
    Json,
};

use crate::auth::AdminSession;
use crate::core::ServerState;
use crate::db::models::{Client, ClientCreate, ClientUpdate};
use crate::utils::{validation, AppError, AppResult};

/// GET /api/clients - ordered by displayOrder
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Client>>> {
    Ok(Json(state.repo.clients().await?))
}

/// POST /api/clients
pub async fn create(
    _session: AdminSession,
    State(state): State<ServerState>,
    Json(payload): Json<ClientCreate>,
) -> AppResult<Json<Client>> {
    validation::check(&payload)?;
    Ok(Json(state.repo.create_client(payload).await?))
}

/// PUT /api/clients/{id}
pub async fn update(
    _session: AdminSession,
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ClientUpdate>,
) -> AppResult<Json<Client>> {
    validation::check(&payload)?;
    let client = state
        .repo
        .update_client(&id, payload)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Client {id}")))?;
    Ok(Json(client))
}

/// DELETE /api/clients/{id}
pub async fn delete(
    _session: AdminSession,
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    if !state.repo.delete_client(&id).await? {
        return Err(AppError::not_found(format!("Client {id}")));
    }
    Ok(Json(true))
}
