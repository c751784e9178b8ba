use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use workout_core::models::WorkoutDatabase;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartDateRequest {
    start_date: Date,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartDateResponse {
    success: bool,
    start_date: Date,
}

pub async fn get_workout_data(
    State(state): State<AppState>,
) -> Result<Json<WorkoutDatabase>, ApiError> {
    Ok(Json(state.store.database().await?))
}

pub async fn set_start_date(
    State(state): State<AppState>,
    req: Result<Json<StartDateRequest>, JsonRejection>,
) -> Result<Json<StartDateResponse>, ApiError> {
    let Json(req) = req?;
    state.store.set_start_date(req.start_date).await?;
    Ok(Json(StartDateResponse {
        success: true,
        start_date: req.start_date,
    }))
}
