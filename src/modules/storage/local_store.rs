//! Directory-backed content store
//!
//! Writes uploaded CVs into a single directory that is also served
//! statically under `/uploads`. Writes are not synchronized: two uploads
//! that map to the same key race and the last writer wins.

use std::path::{Path, PathBuf};

use tracing::{debug, info};
use uuid::Uuid;

use crate::core::config::{UploadConfig, UploadNaming};
use crate::core::error::AppError;
use crate::shared::constants::UPLOADS_ROUTE;

/// A file written to the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    /// Name of the file inside the upload directory
    pub key: String,
    /// Upload directory joined with the key; this is what gets persisted
    pub path: String,
}

pub struct LocalFileStore {
    root: PathBuf,
    naming: UploadNaming,
    max_file_size: usize,
}

impl LocalFileStore {
    pub fn new(config: &UploadConfig) -> Self {
        Self {
            root: PathBuf::from(&config.dir),
            naming: config.naming,
            max_file_size: config.max_file_size,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn max_file_size(&self) -> usize {
        self.max_file_size
    }

    /// Create the upload directory if it does not exist yet
    pub async fn ensure_root_exists(&self) -> Result<(), AppError> {
        tokio::fs::create_dir_all(&self.root).await.map_err(|e| {
            AppError::UploadWrite(format!(
                "Failed to create upload directory {}: {}",
                self.root.display(),
                e
            ))
        })?;
        info!("Upload directory ready: {}", self.root.display());
        Ok(())
    }

    /// Derive the storage key for an uploaded filename.
    ///
    /// Only the last path component of the client-supplied name is kept.
    pub fn storage_key(&self, original_filename: &str) -> Result<String, AppError> {
        let base = original_filename
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or_default()
            .trim();

        if base.is_empty() || base == "." || base == ".." {
            return Err(AppError::MissingUpload);
        }

        Ok(match self.naming {
            UploadNaming::Original => base.to_string(),
            UploadNaming::Unique => format!("{}-{}", Uuid::now_v7(), base),
        })
    }

    /// Write the file under a key from [`Self::storage_key`], replacing any
    /// existing file with the same key
    pub async fn save(&self, key: String, data: &[u8]) -> Result<StoredFile, AppError> {
        let path = self.root.join(&key);

        tokio::fs::write(&path, data).await.map_err(|e| {
            AppError::UploadWrite(format!("Failed to write {}: {}", path.display(), e))
        })?;

        debug!("Stored upload: key={}, size={}", key, data.len());

        Ok(StoredFile {
            key,
            path: path.to_string_lossy().into_owned(),
        })
    }

    /// Public URL of a persisted `cv_path`, with the file name percent-encoded
    pub fn public_url(&self, cv_path: &str) -> String {
        let key = Path::new(cv_path)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        format!("{}/{}", UPLOADS_ROUTE, urlencoding::encode(&key))
    }
}
