use std::io::Cursor;

use chrono::Utc;
use image::ImageFormat;
use s3::creds::Credentials;
use s3::{Bucket, BucketConfiguration, Region};
use tracing::{debug, info, warn};

use crate::core::error::{AppError, Result};
use crate::modules::storage::file_extension;
use crate::shared::constants::{ALLOWED_PHOTO_FORMATS, MAX_PHOTO_DIMENSION};

/// S3-compatible photo storage (MinIO, or any S3 endpoint).
///
/// Photos land under a fixed folder, downscaled to fit 1000x1000, and
/// the returned reference is the direct public URL of the object.
pub struct S3Storage {
    bucket: Box<Bucket>,
    endpoint: String,
    folder: String,
}

impl S3Storage {
    pub async fn new(
        endpoint: &str,
        access_key: &str,
        secret_key: &str,
        bucket_name: &str,
        region: &str,
        folder: &str,
    ) -> Result<Self> {
        let credentials = Credentials::new(Some(access_key), Some(secret_key), None, None, None)
            .map_err(|e| AppError::Internal(format!("Failed to create S3 credentials: {}", e)))?;

        let region = Region::Custom {
            region: region.to_string(),
            endpoint: endpoint.to_string(),
        };

        // Path-style URLs (http://endpoint/bucket) for MinIO compatibility
        let mut bucket = Bucket::new(bucket_name, region.clone(), credentials.clone())
            .map_err(|e| AppError::Internal(format!("Failed to open S3 bucket: {}", e)))?;
        bucket.set_path_style();

        let storage = Self {
            bucket,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            folder: folder.trim_matches('/').to_string(),
        };

        storage.ensure_bucket_exists(region, credentials).await;

        info!(
            "S3 storage initialized: endpoint={}, bucket={}, folder={}",
            storage.endpoint,
            storage.bucket.name(),
            storage.folder
        );

        Ok(storage)
    }

    /// Create the bucket if it does not exist; an already-existing
    /// bucket is not an error.
    async fn ensure_bucket_exists(&self, region: Region, credentials: Credentials) {
        match Bucket::create_with_path_style(
            &self.bucket.name(),
            region,
            credentials,
            BucketConfiguration::default(),
        )
        .await
        {
            Ok(_) => info!("Bucket '{}' created", self.bucket.name()),
            Err(e) => {
                let msg = e.to_string();
                if msg.contains("BucketAlreadyOwnedByYou")
                    || msg.contains("BucketAlreadyExists")
                    || msg.contains("already own it")
                {
                    debug!("Bucket '{}' already exists", self.bucket.name());
                } else {
                    warn!(
                        "Could not create bucket '{}': {}. Assuming it exists.",
                        self.bucket.name(),
                        e
                    );
                }
            }
        }
    }

    /// Validate, downscale, upload. Returns the object's public URL.
    pub async fn store_photo(
        &self,
        user_id: i64,
        original_name: &str,
        content_type: &str,
        data: Vec<u8>,
    ) -> Result<String> {
        let extension = file_extension(original_name)
            .or_else(|| extension_from_content_type(content_type))
            .ok_or_else(|| AppError::Validation("Format foto tidak didukung!".to_string()))?;

        if !ALLOWED_PHOTO_FORMATS.contains(&extension.as_str()) {
            return Err(AppError::Validation(
                "Format foto tidak didukung!".to_string(),
            ));
        }

        let data = downscale(data, &extension).await?;

        let key = format!(
            "{}/{}-{}.{}",
            self.folder,
            user_id,
            Utc::now().timestamp_millis(),
            extension
        );

        self.bucket
            .put_object_with_content_type(&key, &data, content_type)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to upload photo '{}': {}", key, e)))?;

        debug!("Photo uploaded to bucket '{}': {}", self.bucket.name(), key);

        Ok(format!("{}/{}/{}", self.endpoint, self.bucket.name(), key))
    }
}

fn extension_from_content_type(content_type: &str) -> Option<String> {
    match content_type {
        "image/jpeg" => Some("jpg".to_string()),
        "image/png" => Some("png".to_string()),
        "image/webp" => Some("webp".to_string()),
        _ => None,
    }
}

fn image_format(extension: &str) -> Option<ImageFormat> {
    match extension {
        "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
        "png" => Some(ImageFormat::Png),
        "webp" => Some(ImageFormat::WebP),
        _ => None,
    }
}

/// Downscale the photo to fit within 1000x1000, preserving aspect
/// ratio. Images already within the cap pass through untouched. Decode
/// and re-encode run on a blocking thread.
async fn downscale(data: Vec<u8>, extension: &str) -> Result<Vec<u8>> {
    let Some(format) = image_format(extension) else {
        return Ok(data);
    };

    tokio::task::spawn_blocking(move || {
        let img = match image::load_from_memory(&data) {
            Ok(img) => img,
            Err(e) => {
                // Not decodable; store the original bytes as-is.
                warn!("Failed to decode photo for downscaling: {}", e);
                return Ok(data);
            }
        };

        if img.width() <= MAX_PHOTO_DIMENSION && img.height() <= MAX_PHOTO_DIMENSION {
            return Ok(data);
        }

        let resized = img.thumbnail(MAX_PHOTO_DIMENSION, MAX_PHOTO_DIMENSION);
        let mut buf = Cursor::new(Vec::new());
        resized
            .write_to(&mut buf, format)
            .map_err(|e| AppError::Internal(format!("Failed to re-encode photo: {}", e)))?;

        Ok(buf.into_inner())
    })
    .await
    .map_err(|e| AppError::Internal(format!("Downscale task failed: {}", e)))?
}
