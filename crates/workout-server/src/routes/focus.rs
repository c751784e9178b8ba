use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::Deserialize;

use workout_core::focus::exercises_for_focus;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusRequest {
    focus_areas: Vec<String>,
}

pub async fn exercises_for_focus_areas(
    State(state): State<AppState>,
    req: Result<Json<FocusRequest>, JsonRejection>,
) -> Result<Json<Vec<String>>, ApiError> {
    let Json(req) = req?;
    Ok(Json(exercises_for_focus(&state.config, &req.focus_areas)))
}
