//! Testimonial API Handlers

use axum::{
    extract::{Path, State},
    Json,
};

use crate::auth::AdminSession;
use crate::core::ServerState;
use crate::db::models::{Testimonial, TestimonialCreate, TestimonialUpdate};
use crate::utils::{validation, AppError, AppResult};

/// GET /api/testimonials
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Testimonial>>> {
    Ok(Json(state.repo.testimonials().await?))
}

/// POST /api/testimonials
pub async fn create(
    _session: AdminSession,
    State(state): State<ServerState>,
    Json(payload): Json<TestimonialCreate>,
) -> AppResult<Json<Testimonial>> {
    validation::check(&payload)?;
    Ok(Json(state.repo.create_testimonial(payload).await?))
}

/// PUT /api/testimonials/{id}
pub async fn update(
    _session: AdminSession,
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<TestimonialUpdate>,
) -> AppResult<Json<Testimonial>> {
    validation::check(&payload)?;
    let testimonial = state
        .repo
        .update_testimonial(&id, payload)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Testimonial {id}")))?;
    Ok(Json(testimonial))
}

/// DELETE /api/testimonials/{id}
pub async fn delete(
    _session: AdminSession,
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    if !state.repo.delete_testimonial(&id).await? {
        return Err(AppError::not_found(format!("Testimonial {id}")));
    }
    Ok(Json(true))
}
