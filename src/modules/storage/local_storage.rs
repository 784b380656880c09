use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::core::error::{AppError, Result};
use crate::modules::storage::file_extension;

/// Disk-backed photo storage under the uploads directory.
///
/// Filenames are `{user_id}-{millis}{ext}`, matching what the static
/// `/uploads/*` route serves back to the SPA.
pub struct LocalStorage {
    dir: PathBuf,
}

impl LocalStorage {
    pub async fn new(dir: &str) -> Result<Self> {
        let dir = PathBuf::from(dir);

        tokio::fs::create_dir_all(&dir).await.map_err(|e| {
            AppError::Internal(format!(
                "Failed to create uploads directory {:?}: {}",
                dir, e
            ))
        })?;

        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write the photo to disk and return its filename.
    pub async fn store_photo(
        &self,
        user_id: i64,
        original_name: &str,
        data: Vec<u8>,
    ) -> Result<String> {
        let extension = file_extension(original_name)
            .map(|ext| format!(".{}", ext))
            .unwrap_or_default();
        let file_name = format!("{}-{}{}", user_id, Utc::now().timestamp_millis(), extension);

        let path = self.dir.join(&file_name);
        tokio::fs::write(&path, data)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to write photo {:?}: {}", path, e)))?;

        tracing::debug!("Photo stored locally: {}", file_name);
        Ok(file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_store_photo_writes_file() {
        let dir = std::env::temp_dir().join(format!("laporjalan-test-{}", uuid::Uuid::new_v4()));
        let storage = LocalStorage::new(dir.to_str().unwrap()).await.unwrap();

        let name = storage
            .store_photo(7, "lubang.jpg", b"fake-jpeg-bytes".to_vec())
            .await
            .unwrap();

        assert!(name.starts_with("7-"));
        assert!(name.ends_with(".jpg"));
        let written = tokio::fs::read(dir.join(&name)).await.unwrap();
        assert_eq!(written, b"fake-jpeg-bytes");

        tokio::fs::remove_dir_all(dir).await.unwrap();
    }
}
