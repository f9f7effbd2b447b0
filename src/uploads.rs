//! Image upload handling: extension validation, filename generation, and
//! multipart reading. Files land under `UPLOAD_DIR` and are served back via
//! actix-files at `/images`; only the relative path is persisted.

use actix_multipart::Multipart;
use futures_util::StreamExt;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::errors::ApiError;

/// File extensions accepted for image uploads (compared case-insensitively).
const ALLOWED_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "bmp"];

/// Maximum accepted upload size (10 MB).
const MAX_UPLOAD_SIZE: usize = 10 * 1024 * 1024;

/// Resolve the on-disk upload directory from `UPLOAD_DIR`.
pub fn upload_dir() -> PathBuf {
    std::env::var("UPLOAD_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| Path::new("wwwroot").join("images"))
}

/// Validate a declared filename against the image allow-list and return its
/// lowercased extension.
pub fn validate_extension(filename: &str) -> Result<String, ApiError> {
    let ext = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .ok_or_else(|| {
            ApiError::Validation("Invalid file type. Only image files are allowed.".to_string())
        })?;

    if ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
        Ok(ext)
    } else {
        Err(ApiError::Validation(
            "Invalid file type. Only image files are allowed.".to_string(),
        ))
    }
}

/// Collision-resistant filename preserving a validated extension.
pub fn generate_filename(ext: &str) -> String {
    format!("{}.{ext}", Uuid::new_v4())
}

/// Read the first file field from a multipart payload.
///
/// Returns the declared filename and the raw bytes. Rejects payloads with no
/// file field and enforces the size cap while streaming.
pub async fn read_image_field(mut payload: Multipart) -> Result<(String, Vec<u8>), ApiError> {
    while let Some(item) = payload.next().await {
        let mut field = item
            .map_err(|e| ApiError::Validation(format!("Invalid multipart data: {e}")))?;

        let Some(filename) = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(str::to_string)
        else {
            // Not a file field; skip it.
            while field.next().await.is_some() {}
            continue;
        };

        let mut data = Vec::new();
        while let Some(chunk) = field.next().await {
            let bytes =
                chunk.map_err(|e| ApiError::Validation(format!("Failed to read file: {e}")))?;
            if data.len() + bytes.len() > MAX_UPLOAD_SIZE {
                return Err(ApiError::Validation(format!(
                    "File size exceeds maximum {} MB",
                    MAX_UPLOAD_SIZE / 1024 / 1024
                )));
            }
            data.extend_from_slice(&bytes);
        }

        return Ok((filename, data));
    }

    Err(ApiError::Validation("No file was uploaded.".to_string()))
}

/// Validate, name, and store an uploaded image; returns the relative URL to
/// persist. The database row must only be written after this succeeds.
pub async fn store_image(declared_filename: &str, data: &[u8]) -> Result<String, ApiError> {
    if data.is_empty() {
        return Err(ApiError::Validation("No file was uploaded.".to_string()));
    }

    let ext = validate_extension(declared_filename)?;
    let filename = generate_filename(&ext);

    let dir = upload_dir();
    tokio::fs::create_dir_all(&dir).await?;
    tokio::fs::write(dir.join(&filename), data).await?;

    Ok(format!("/images/{filename}"))
}

/// Best-effort removal of a previously stored image, given its relative URL.
pub async fn remove_image(image_url: &str) {
    let Some(filename) = image_url.strip_prefix("/images/") else {
        return;
    };
    if filename.is_empty() || filename.contains('/') || filename.contains("..") {
        return;
    }
    if let Err(e) = tokio::fs::remove_file(upload_dir().join(filename)).await {
        tracing::debug!("Could not remove old image {image_url}: {e}");
    }
}
