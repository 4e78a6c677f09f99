//! Enquiry API Handlers

use axum::{
    extract::{Path, State},
    Json,
};

use crate::auth::AdminSession;
use crate::core::ServerState;
use crate::db::models::{Enquiry, EnquiryCreate, EnquiryUpdate};
use crate::utils::{validation, AppError, AppResult};

/// GET /api/enquiries
pub async fn list(
    _session: AdminSession,
    State(state): State<ServerState>,
) -> AppResult<Json<Vec<Enquiry>>> {
    Ok(Json(state.repo.enquiries().await?))
}

/// POST /api/enquiries - public intake, starts in `pending`
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<EnquiryCreate>,
) -> AppResult<Json<Enquiry>> {
    validation::check(&payload)?;
    let enquiry = state.repo.create_enquiry(payload).await?;
    tracing::info!(id = %enquiry.id, "Enquiry received");
    Ok(Json(enquiry))
}

/// PUT /api/enquiries/{id} - status transitions
pub async fn update(
    _session: AdminSession,
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<EnquiryUpdate>,
) -> AppResult<Json<Enquiry>> {
    validation::check(&payload)?;
    let enquiry = state
        .repo
        .update_enquiry(&id, payload)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Enquiry {id}")))?;
    Ok(Json(enquiry))
}

/// DELETE /api/enquiries/{id}
pub async fn delete(
    _session: AdminSession,
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    if !state.repo.delete_enquiry(&id).await? {
        return Err(AppError::not_found(format!("Enquiry {id}")));
    }
    Ok(Json(true))
}
