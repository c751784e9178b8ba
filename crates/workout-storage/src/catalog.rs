use std::path::Path;

use workout_core::models::TrackerConfig;

use crate::error::StorageError;

/// Read the static focus-area config. Called once at startup.
pub async fn load_tracker_config(path: &Path) -> Result<TrackerConfig, StorageError> {
    let body = tokio::fs::read(path).await.map_err(|e| StorageError::Read {
        location: path.display().to_string(),
        message: e.to_string(),
    })?;

    let config = parse_tracker_config(&body)?;
    tracing::info!(
        path = %path.display(),
        weights = config.focus_areas.weights.len(),
        other = config.focus_areas.other.len(),
        "focus area config loaded"
    );
    Ok(config)
}

pub fn parse_tracker_config(body: &[u8]) -> Result<TrackerConfig, StorageError> {
    let config: TrackerConfig = serde_json::from_slice(body)?;
    config.validate()?;
    Ok(config)
}
