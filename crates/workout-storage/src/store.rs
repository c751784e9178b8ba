use std::sync::Arc;

use jiff::civil::Date;
use tokio::sync::Mutex;

use workout_core::models::{Week, WorkoutDatabase};
use workout_core::schedule;

use crate::backend::DocumentBackend;
use crate::error::StorageError;
use crate::state::{load_state, save_state};

/// The tracker's single mutable record.
///
/// Every call reads the whole document; mutating calls write the whole
/// document back. Mutations are serialized through `write_lock`, so two
/// requests in this process cannot interleave a read-modify-write.
pub struct WorkoutStore {
    backend: Arc<dyn DocumentBackend>,
    write_lock: Mutex<()>,
}

impl WorkoutStore {
    pub fn new(backend: Arc<dyn DocumentBackend>) -> Self {
        Self {
            backend,
            write_lock: Mutex::new(()),
        }
    }

    pub fn location(&self) -> String {
        self.backend.location()
    }

    /// Create an empty database anchored at `today` if none exists yet.
    /// Returns `true` when a new document was written.
    pub async fn initialize(&self, today: Date) -> Result<bool, StorageError> {
        let _guard = self.write_lock.lock().await;
        if self.backend.read().await?.is_some() {
            return Ok(false);
        }

        save_state(self.backend.as_ref(), &WorkoutDatabase::new(today)).await?;
        tracing::info!(location = %self.location(), start_date = %today, "created workout database");
        Ok(true)
    }

    async fn load(&self) -> Result<WorkoutDatabase, StorageError> {
        let db = load_state::<WorkoutDatabase>(self.backend.as_ref()).await?;
        Ok(db.unwrap_or_else(|| WorkoutDatabase::new(schedule::today())))
    }

    async fn save(&self, db: &WorkoutDatabase) -> Result<(), StorageError> {
        save_state(self.backend.as_ref(), db).await
    }

    pub async fn database(&self) -> Result<WorkoutDatabase, StorageError> {
        self.load().await
    }

    /// Move the anchor. Weeks already stored keep their dates.
    pub async fn set_start_date(&self, start_date: Date) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;
        let mut db = self.load().await?;
        db.start_date = start_date;
        self.save(&db).await?;
        tracing::info!(%start_date, "start date updated");
        Ok(())
    }

    /// Fetch a week, materializing and persisting it on first request.
    pub async fn week(&self, week_number: u32) -> Result<Week, StorageError> {
        let _guard = self.write_lock.lock().await;
        let mut db = self.load().await?;
        let (week, created) = db.get_or_materialize(week_number)?;
        if created {
            self.save(&db).await?;
            tracing::info!(
                week_number,
                start_date = ?week.start_date(),
                end_date = ?week.end_date(),
                "week materialized"
            );
        }
        Ok(week)
    }

    /// Replace the stored week wholesale, or append it.
    pub async fn save_week(&self, week_number: u32, week: Week) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;
        let mut db = self.load().await?;
        db.replace_week(week_number, week)?;
        self.save(&db).await?;
        tracing::info!(week_number, "week saved");
        Ok(())
    }

    /// The stored week as-is. Unlike [`WorkoutStore::week`], a week that was
    /// never requested is reported missing rather than created.
    pub async fn export_week(&self, week_number: u32) -> Result<Week, StorageError> {
        schedule::check_week_number(week_number)?;
        let db = self.load().await?;
        db.week(week_number)
            .cloned()
            .ok_or(StorageError::WeekNotFound { week_number })
    }
}
