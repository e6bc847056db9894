//! Loading local media files for upload

use std::path::Path;

use crate::domain::{DomainError, MediaFile};

const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

/// Read a file into memory, naming it after the path and guessing its MIME
/// type from the extension.
pub async fn load_media_file(path: &Path) -> Result<MediaFile, DomainError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| DomainError::io(format!("Failed to read {}: {}", path.display(), e)))?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_string());

    let mime_type = mime_guess::from_path(path)
        .first_raw()
        .unwrap_or(FALLBACK_MIME_TYPE);

    Ok(MediaFile::new(file_name, mime_type, bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(extension: &str) -> PathBuf {
        std::env::temp_dir().join(format!("media-test-{}.{}", uuid::Uuid::new_v4(), extension))
    }

    #[tokio::test]
    async fn test_load_mp4() {
        let path = temp_path("mp4");
        tokio::fs::write(&path, b"fake video").await.unwrap();

        let file = load_media_file(&path).await.unwrap();
        tokio::fs::remove_file(&path).await.unwrap();

        assert_eq!(file.mime_type, "video/mp4");
        assert!(file.file_name.ends_with(".mp4"));
        assert_eq!(file.bytes.as_ref(), b"fake video");
    }

    #[tokio::test]
    async fn test_unknown_extension_falls_back() {
        let path = temp_path("unknownext");
        tokio::fs::write(&path, b"data").await.unwrap();

        let file = load_media_file(&path).await.unwrap();
        tokio::fs::remove_file(&path).await.unwrap();

        assert_eq!(file.mime_type, FALLBACK_MIME_TYPE);
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let err = load_media_file(&temp_path("mp4")).await.unwrap_err();
        assert!(matches!(err, DomainError::Io { .. }));
    }
}
