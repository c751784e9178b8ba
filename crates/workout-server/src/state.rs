use std::sync::Arc;

use workout_core::models::TrackerConfig;
use workout_storage::store::WorkoutStore;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<TrackerConfig>,
    pub store: Arc<WorkoutStore>,
}

impl AppState {
    pub fn new(config: TrackerConfig, store: WorkoutStore) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(store),
        }
    }
}
