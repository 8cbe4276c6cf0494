use crate::{domain::FileStorage, errors::StorageError};
use anyhow::Context;
use async_trait::async_trait;
use std::path::PathBuf;
use std::time::Duration;
use tokio::fs;
use tokio::time::timeout;

/// Writes uploaded images to a directory on local disk.
///
/// Each write is staged to a `.tmp` sibling and renamed into place, so a
/// concurrent reader never observes a partially-written image: the final
/// path either holds the complete bytes or does not exist. Writes are
/// bounded by `write_timeout`; a stalled disk fails the submission instead
/// of blocking it indefinitely.
#[derive(Debug, Clone)]
pub struct LocalImageStorage {
    image_dir: PathBuf,
    write_timeout: Duration,
}

impl LocalImageStorage {
    pub fn new(image_dir: PathBuf, write_timeout: Duration) -> Self {
        Self {
            image_dir,
            write_timeout,
        }
    }

    async fn write_staged(&self, file_name: &str, bytes: &[u8]) -> Result<(), StorageError> {
        let final_path = self.image_dir.join(file_name);
        let staging_path = self.image_dir.join(format!("{file_name}.tmp"));

        fs::write(&staging_path, bytes)
            .await
            .context(format!(
                "failed to write staged image '{}'",
                staging_path.display()
            ))
            .map_err(|e| StorageError::WriteFailed(e.to_string()))?;

        if let Err(e) = fs::rename(&staging_path, &final_path).await {
            // Don't leave the staged file behind.
            let _ = fs::remove_file(&staging_path).await;
            return Err(StorageError::WriteFailed(format!(
                "failed to move staged image into '{}': {e}",
                final_path.display()
            )));
        }

        Ok(())
    }
}

#[async_trait]
impl FileStorage for LocalImageStorage {
    async fn store(&self, file_name: &str, bytes: &[u8]) -> Result<(), StorageError> {
        tracing::debug!(file_name, len = bytes.len(), "storage: writing image");

        match timeout(self.write_timeout, self.write_staged(file_name, bytes)).await {
            Ok(result) => result?,
            Err(_) => return Err(StorageError::Timeout(self.write_timeout)),
        }

        tracing::debug!(file_name, "storage: image write complete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn store_writes_complete_file_and_removes_staging() {
        let dir = TempDir::new().unwrap();
        let storage = LocalImageStorage::new(dir.path().to_path_buf(), Duration::from_secs(5));

        storage.store("taco.jpg", b"jpeg bytes").await.unwrap();

        let written = std::fs::read(dir.path().join("taco.jpg")).unwrap();
        assert_eq!(written, b"jpeg bytes");
        assert!(!dir.path().join("taco.jpg.tmp").exists());
    }

    #[tokio::test]
    async fn store_fails_when_directory_is_missing() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        let storage = LocalImageStorage::new(missing.clone(), Duration::from_secs(5));

        let err = storage.store("taco.jpg", b"jpeg bytes").await.unwrap_err();
        assert!(matches!(err, StorageError::WriteFailed(_)));
        assert!(!missing.join("taco.jpg").exists());
    }
}
