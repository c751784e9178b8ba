use thiserror::Error;

use workout_core::error::CoreError;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("week {week_number} not found")]
    WeekNotFound { week_number: u32 },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("read error ({location}): {message}")]
    Read { location: String, message: String },

    #[error("write error ({location}): {message}")]
    Write { location: String, message: String },
}
