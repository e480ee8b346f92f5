//! Image references handed to the captioning stage.

use pictale_error::{InputError, InputErrorKind, PictaleResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// JPEG start-of-image marker.
const JPEG_MAGIC: [u8; 3] = [0xFF, 0xD8, 0xFF];

/// A reference to an uploaded image: a path in local storage or an
/// in-memory buffer.
///
/// Immutable once captured; consumed once by the captioner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageReference {
    /// Image persisted to local storage
    Path(PathBuf),
    /// Image held in memory
    Bytes {
        /// Original file name
        name: String,
        /// Raw image bytes
        data: Vec<u8>,
    },
}

impl ImageReference {
    /// Reference an image on disk.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self::Path(path.into())
    }

    /// Reference an in-memory image.
    pub fn from_bytes(name: impl Into<String>, data: Vec<u8>) -> Self {
        Self::Bytes {
            name: name.into(),
            data,
        }
    }

    /// Human-readable description used in logs and errors.
    pub fn describe(&self) -> String {
        match self {
            Self::Path(path) => path.display().to_string(),
            Self::Bytes { name, data } => format!("{} ({} bytes in memory)", name, data.len()),
        }
    }

    /// Path on disk, when the image is persisted.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Path(path) => Some(path),
            Self::Bytes { .. } => None,
        }
    }

    /// Read the image bytes.
    ///
    /// # Errors
    ///
    /// Returns [`InputErrorKind::UnreadableImage`] when the file cannot be
    /// read and [`InputErrorKind::EmptyImage`] when it holds no bytes.
    #[tracing::instrument(skip(self), fields(image = %self.describe()))]
    pub async fn read(&self) -> PictaleResult<Vec<u8>> {
        let data = match self {
            Self::Path(path) => tokio::fs::read(path).await.map_err(|e| {
                InputError::new(InputErrorKind::UnreadableImage(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
            })?,
            Self::Bytes { data, .. } => data.clone(),
        };

        if data.is_empty() {
            return Err(InputError::new(InputErrorKind::EmptyImage(self.describe())).into());
        }

        tracing::debug!(size = data.len(), "Read image");
        Ok(data)
    }
}

/// True when `data` begins with the JPEG start-of-image marker.
///
/// # Examples
///
/// ```
/// use pictale_core::is_jpeg;
///
/// assert!(is_jpeg(&[0xFF, 0xD8, 0xFF, 0xE0]));
/// assert!(!is_jpeg(b"\x89PNG"));
/// ```
pub fn is_jpeg(data: &[u8]) -> bool {
    data.starts_with(&JPEG_MAGIC)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_missing_file_is_input_error() {
        let image = ImageReference::from_path("/definitely/not/here.jpg");
        let err = image.read().await.unwrap_err();
        assert_eq!(err.stage_error(), "InputError");
    }

    #[tokio::test]
    async fn test_read_empty_file_is_input_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.jpg");
        std::fs::write(&path, b"").unwrap();

        let err = ImageReference::from_path(&path).read().await.unwrap_err();
        assert!(format!("{}", err).contains("Image is empty"));
    }

    #[tokio::test]
    async fn test_read_bytes() {
        let image = ImageReference::from_bytes("cat.jpg", vec![0xFF, 0xD8, 0xFF, 0x00]);
        assert_eq!(image.read().await.unwrap().len(), 4);
        assert!(image.path().is_none());
        assert!(image.describe().starts_with("cat.jpg"));
    }
}
