//! Photo storage strategies.
//!
//! Picked once at process start: S3-compatible remote storage when the
//! credential triple is configured, local disk under `uploads/`
//! otherwise. Either way the result is an opaque reference string
//! (absolute URL or bare filename) that the report handler persists;
//! this module knows nothing about the Report entity.

mod local_storage;
mod s3_storage;

pub use local_storage::LocalStorage;
pub use s3_storage::S3Storage;

use crate::core::config::StorageConfig;
use crate::core::error::Result;

pub enum Storage {
    Remote(S3Storage),
    Local(LocalStorage),
}

impl Storage {
    /// Select the storage strategy from configuration.
    pub async fn from_config(config: &StorageConfig) -> Result<Self> {
        if let Some((endpoint, access_key, secret_key)) = config.remote_credentials() {
            let storage = S3Storage::new(
                endpoint,
                access_key,
                secret_key,
                &config.s3_bucket,
                &config.s3_region,
                &config.s3_folder,
            )
            .await?;
            tracing::info!("Using S3-compatible storage for photo uploads");
            Ok(Storage::Remote(storage))
        } else {
            let storage = LocalStorage::new(&config.uploads_dir).await?;
            tracing::warn!(
                "Using local disk for photo storage (dir: {})",
                config.uploads_dir
            );
            Ok(Storage::Local(storage))
        }
    }

    /// Store a photo and return its reference: an absolute URL for the
    /// remote strategy, a bare filename for the local one.
    pub async fn store_photo(
        &self,
        user_id: i64,
        file_name: &str,
        content_type: &str,
        data: Vec<u8>,
    ) -> Result<String> {
        match self {
            Storage::Remote(s3) => s3.store_photo(user_id, file_name, content_type, data).await,
            Storage::Local(local) => local.store_photo(user_id, file_name, data).await,
        }
    }

    /// Directory served under `/uploads/*`, if the local strategy is
    /// active.
    pub fn local_dir(&self) -> Option<&std::path::Path> {
        match self {
            Storage::Remote(_) => None,
            Storage::Local(local) => Some(local.dir()),
        }
    }
}

/// Lowercased file extension, used for naming and the format allow-list.
pub(crate) fn file_extension(file_name: &str) -> Option<String> {
    std::path::Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension("jalan.JPG"), Some("jpg".to_string()));
        assert_eq!(file_extension("foto.webp"), Some("webp".to_string()));
        assert_eq!(file_extension("noext"), None);
    }
}
