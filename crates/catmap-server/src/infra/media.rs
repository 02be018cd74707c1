//! Upload pipeline port.
//!
//! File receipt, thumbnail naming, and coordinate extraction sit behind
//! `MediaPipeline` so the cat lifecycle never touches file I/O. The local
//! backend stores the original bytes under the thumbnail name and reports no
//! coordinates; callers fall back to the `(0,0)` location default.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use catmap_core::GeoPoint;

#[derive(Debug)]
pub struct StoredUpload {
    /// Thumbnail filename, ready to attach to a cat record.
    pub filename: String,
    pub coordinates: Option<GeoPoint>,
}

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("upload_write_failed")]
    Write(#[source] std::io::Error),
}

#[async_trait]
pub trait MediaPipeline: Send + Sync {
    async fn store_upload(
        &self,
        original_name: &str,
        bytes: Vec<u8>,
    ) -> Result<StoredUpload, MediaError>;
}

pub struct LocalMedia {
    upload_dir: PathBuf,
}

impl LocalMedia {
    pub fn new(upload_dir: impl Into<PathBuf>) -> Self {
        Self {
            upload_dir: upload_dir.into(),
        }
    }
}

fn safe_extension(original_name: &str) -> String {
    Path::new(original_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_else(|| "bin".to_string())
}

#[async_trait]
impl MediaPipeline for LocalMedia {
    async fn store_upload(
        &self,
        original_name: &str,
        bytes: Vec<u8>,
    ) -> Result<StoredUpload, MediaError> {
        let extension = safe_extension(original_name);
        let stem = Uuid::now_v7().simple().to_string();

        tokio::fs::create_dir_all(&self.upload_dir)
            .await
            .map_err(MediaError::Write)?;
        let original = self.upload_dir.join(format!("{stem}.{extension}"));
        tokio::fs::write(&original, &bytes)
            .await
            .map_err(MediaError::Write)?;
        let thumb_name = format!("{stem}_thumb.{extension}");
        let thumb = self.upload_dir.join(&thumb_name);
        tokio::fs::write(&thumb, &bytes)
            .await
            .map_err(MediaError::Write)?;

        tracing::info!(event = "upload_stored", filename = %thumb_name, "Upload stored");
        Ok(StoredUpload {
            filename: thumb_name,
            coordinates: None,
        })
    }
}
