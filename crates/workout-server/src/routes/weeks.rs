use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use serde::Serialize;

use workout_core::models::Week;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct SaveResponse {
    success: bool,
}

/// Returns the stored week, materializing it on first request.
pub async fn get_week(
    State(state): State<AppState>,
    week_number: Result<Path<u32>, PathRejection>,
) -> Result<Json<Week>, ApiError> {
    let Path(week_number) = week_number?;
    Ok(Json(state.store.week(week_number).await?))
}

pub async fn save_week(
    State(state): State<AppState>,
    week_number: Result<Path<u32>, PathRejection>,
    week: Result<Json<Week>, JsonRejection>,
) -> Result<Json<SaveResponse>, ApiError> {
    let Path(week_number) = week_number?;
    let Json(week) = week?;
    state.store.save_week(week_number, week).await?;
    Ok(Json(SaveResponse { success: true }))
}
