use axum::Json;
use axum::extract::State;

use workout_core::models::TrackerConfig;

use crate::state::AppState;

pub async fn get_config(State(state): State<AppState>) -> Json<TrackerConfig> {
    Json(state.config.as_ref().clone())
}
