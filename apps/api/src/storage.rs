/// Persistence of uploaded resume files.
///
/// Uploads are written under `Config::upload_dir` before extraction so a
/// failed request still leaves the original bytes on disk for inspection.
use anyhow::Context;
use std::path::PathBuf;
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;

/// Reduces a client-supplied filename to a safe single path component.
///
/// ASCII alphanumerics, `.`, `-` and `_` pass through; everything else
/// (separators, whitespace, control bytes, non-ASCII) becomes `_`. Names
/// that are empty or made of only dots/underscores (`..`, `___`) fall back
/// to `resume.pdf`.
pub fn sanitize_filename(name: &str) -> String {
    let sanitized: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if sanitized.trim_matches(|c| c == '.' || c == '_').is_empty() {
        "resume.pdf".to_string()
    } else {
        sanitized
    }
}

/// Writes the uploaded bytes to `{upload_dir}/{uuid}_{sanitized_name}`.
///
/// The UUID prefix keeps two users uploading `resume.pdf` from clobbering
/// each other. Returns the path the file was written to.
pub async fn store_upload(
    upload_dir: &str,
    original_name: &str,
    bytes: &[u8],
) -> Result<PathBuf, AppError> {
    tokio::fs::create_dir_all(upload_dir)
        .await
        .context("Failed to create upload directory")?;

    let filename = format!("{}_{}", Uuid::new_v4(), sanitize_filename(original_name));
    let path = PathBuf::from(upload_dir).join(filename);

    tokio::fs::write(&path, bytes)
        .await
        .with_context(|| format!("Failed to write upload to {}", path.display()))?;

    debug!("Stored upload at {}", path.display());
    Ok(path)
}
