use serde::{Serialize, de::DeserializeOwned};

use crate::backend::DocumentBackend;
use crate::error::StorageError;

/// Load a JSON state document. `None` when nothing has been stored yet.
pub async fn load_state<T: DeserializeOwned>(
    backend: &dyn DocumentBackend,
) -> Result<Option<T>, StorageError> {
    let Some(body) = backend.read().await? else {
        return Ok(None);
    };
    let value: T = serde_json::from_slice(&body)?;
    Ok(Some(value))
}

/// Save a JSON state document, pretty-printed, replacing whatever was there.
pub async fn save_state<T: Serialize>(
    backend: &dyn DocumentBackend,
    value: &T,
) -> Result<(), StorageError> {
    let body = serde_json::to_vec_pretty(value)?;
    backend.write(body).await
}
