use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::StorageError;

/// Where the tracker document lives. Reads and writes always move the
/// whole document.
#[async_trait]
pub trait DocumentBackend: Send + Sync {
    /// Human-readable location, used in logs and errors.
    fn location(&self) -> String;

    /// The stored bytes, or `None` if nothing has been written yet.
    async fn read(&self) -> Result<Option<Vec<u8>>, StorageError>;

    /// Replace the stored document.
    async fn write(&self, body: Vec<u8>) -> Result<(), StorageError>;
}

/// A JSON file on local disk.
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn tmp_path(&self) -> PathBuf {
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        PathBuf::from(tmp)
    }

    fn read_error(&self, e: std::io::Error) -> StorageError {
        StorageError::Read {
            location: self.location(),
            message: e.to_string(),
        }
    }

    fn write_error(&self, e: std::io::Error) -> StorageError {
        StorageError::Write {
            location: self.location(),
            message: e.to_string(),
        }
    }
}

#[async_trait]
impl DocumentBackend for FileBackend {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    async fn read(&self) -> Result<Option<Vec<u8>>, StorageError> {
        match tokio::fs::read(&self.path).await {
            Ok(body) => Ok(Some(body)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(self.read_error(e)),
        }
    }

    async fn write(&self, body: Vec<u8>) -> Result<(), StorageError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|e| self.write_error(e))?;
        }

        // Write to a temp file then rename, so readers never see a partial document.
        let tmp_path = self.tmp_path();
        tokio::fs::write(&tmp_path, &body)
            .await
            .map_err(|e| self.write_error(e))?;
        tokio::fs::rename(&tmp_path, &self.path)
            .await
            .map_err(|e| self.write_error(e))?;

        tracing::debug!(path = %self.path.display(), bytes = body.len(), "document written");
        Ok(())
    }
}

/// In-memory backend for tests and throwaway runs.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    document: Mutex<Option<Vec<u8>>>,
    writes: Mutex<usize>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(body: impl Into<Vec<u8>>) -> Self {
        Self {
            document: Mutex::new(Some(body.into())),
            writes: Mutex::new(0),
        }
    }

    /// The current document, if any.
    pub async fn contents(&self) -> Option<Vec<u8>> {
        self.document.lock().await.clone()
    }

    /// How many times the document has been written.
    pub async fn write_count(&self) -> usize {
        *self.writes.lock().await
    }
}

#[async_trait]
impl DocumentBackend for MemoryBackend {
    fn location(&self) -> String {
        "memory".to_string()
    }

    async fn read(&self) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.document.lock().await.clone())
    }

    async fn write(&self, body: Vec<u8>) -> Result<(), StorageError> {
        *self.document.lock().await = Some(body);
        *self.writes.lock().await += 1;
        Ok(())
    }
}
