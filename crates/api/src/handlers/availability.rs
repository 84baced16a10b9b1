//! # Availability Handlers
//!
//! Read and update a professor's confirmed hourly availability.
//!
//! Clients edit availability locally with a slot engine and send the result
//! as a change-set. The server only checks the change-set itself: every
//! added slot must fall inside the configured working hours and no slot may
//! be both added and removed. Re-sending a change-set is harmless, since
//! existing additions and missing removals are skipped by the store.

use axum::{
    extract::{Path, State},
    Json,
};
use availability_core::{
    models::availability::{AvailabilityResponse, ChangeSet, SubmitResult},
    working_hours::WorkingHours,
};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

/// Returns the professor's confirmed availability, in chronological order.
///
/// ```text
/// GET /api/professors/:id/availability
/// ```
///
/// A professor without any recorded slot gets an empty list.
#[axum::debug_handler]
pub async fn get_availability(
    State(state): State<Arc<ApiState>>,
    Path(professor_id): Path<Uuid>,
) -> Result<Json<AvailabilityResponse>, AppError> {
    let slots = state.store.fetch_baseline(professor_id).await?;

    Ok(Json(AvailabilityResponse {
        professor_id,
        slots,
    }))
}

/// Applies a change-set to the professor's availability.
///
/// ```text
/// POST /api/professors/:id/availability
/// { "add": ["2024-05-06T09:00:00"], "remove": [] }
/// ```
///
/// # Errors
///
/// * `AvailabilityError::OutOfHours` - An added slot is outside working hours (422)
/// * `AvailabilityError::Validation` - A slot is both added and removed (400)
/// * `AvailabilityError::Store` - The store failed (500)
#[axum::debug_handler]
pub async fn submit_change_set(
    State(state): State<Arc<ApiState>>,
    Path(professor_id): Path<Uuid>,
    Json(payload): Json<ChangeSet>,
) -> Result<Json<SubmitResult>, AppError> {
    let change_set = payload.normalized();
    change_set.validate(&state.working_hours)?;

    let result = state
        .store
        .submit_change_set(professor_id, &change_set)
        .await?;

    info!(
        "Availability updated: professor_id={}, added={}, removed={}",
        professor_id, result.added, result.removed
    );
    Ok(Json(result))
}

/// Publishes the working-hours window so clients can build engines that
/// agree with server-side validation.
pub async fn get_working_hours(State(state): State<Arc<ApiState>>) -> Json<WorkingHours> {
    Json(state.working_hours.clone())
}
