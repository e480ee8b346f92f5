//! Filesystem-backed artifact storage.

use pictale_core::{AudioArtifact, AudioArtifactRef, ImageReference, RunId};
use pictale_error::{InputError, InputErrorKind, PictaleResult, StorageError, StorageErrorKind};
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

const RUNS_DIR: &str = "runs";
const IMAGE_DIR: &str = "image";
const FALLBACK_UPLOAD_NAME: &str = "upload.jpg";

/// Compute the hex-encoded SHA-256 of `data`.
pub fn content_hash(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}

/// Artifact storage rooted at a base directory.
///
/// Structure: `{base}/runs/{run_id}/image/{upload}` for uploaded images and
/// `{base}/runs/{run_id}/{audio_file_name}` for narrations.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    base_path: PathBuf,
}

impl ArtifactStore {
    /// Create a new store, creating the base directory if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns error if the directory cannot be created or accessed.
    #[tracing::instrument(skip(base_path))]
    pub fn new(base_path: impl Into<PathBuf>) -> PictaleResult<Self> {
        let base_path = base_path.into();

        std::fs::create_dir_all(base_path.join(RUNS_DIR)).map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation {
                path: base_path.display().to_string(),
                reason: e.to_string(),
            })
        })?;

        tracing::info!(path = %base_path.display(), "Opened artifact storage");
        Ok(Self { base_path })
    }

    /// Root directory of the store.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Directory holding every artifact of one run.
    pub fn run_dir(&self, run_id: RunId) -> PathBuf {
        self.base_path.join(RUNS_DIR).join(run_id.to_string())
    }

    /// Reduce a client-supplied file name to a safe final path component.
    fn sanitize_file_name(original: &str) -> String {
        Path::new(original)
            .file_name()
            .and_then(|name| name.to_str())
            .map(str::trim)
            .filter(|name| !name.is_empty() && *name != "." && *name != "..")
            .map(str::to_string)
            .unwrap_or_else(|| FALLBACK_UPLOAD_NAME.to_string())
    }

    /// Persist an uploaded image under the run's directory, keeping its
    /// original file name.
    ///
    /// # Errors
    ///
    /// Returns an `InputError` for an empty upload and a `StorageError` if the
    /// file cannot be written.
    #[tracing::instrument(skip(self, data), fields(run_id = %run_id, size = data.len()))]
    pub async fn store_upload(
        &self,
        run_id: RunId,
        original_name: &str,
        data: &[u8],
    ) -> PictaleResult<ImageReference> {
        if data.is_empty() {
            return Err(
                InputError::new(InputErrorKind::EmptyImage(original_name.to_string())).into(),
            );
        }

        let name = Self::sanitize_file_name(original_name);
        let path = self.run_dir(run_id).join(IMAGE_DIR).join(&name);
        Self::write_atomic(&path, data).await?;

        tracing::info!(
            path = %path.display(),
            hash = %content_hash(data),
            "Stored uploaded image"
        );
        Ok(ImageReference::from_path(path))
    }

    /// Persist a run's audio, replacing any earlier content at the same path.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if `file_name` is not a bare file name or the
    /// file cannot be written.
    #[tracing::instrument(skip(self, audio), fields(run_id = %run_id, size = audio.len()))]
    pub async fn store_audio(
        &self,
        run_id: RunId,
        audio: &AudioArtifact,
        file_name: &str,
    ) -> PictaleResult<AudioArtifactRef> {
        let path = self.audio_path(run_id, file_name)?;
        Self::write_atomic(&path, audio.data()).await?;

        let hash = content_hash(audio.data());
        tracing::info!(
            path = %path.display(),
            hash = %hash,
            mime_type = %audio.mime_type(),
            "Stored audio artifact"
        );

        Ok(AudioArtifactRef::new(
            run_id,
            path,
            audio.len() as u64,
            hash,
            audio.mime_type().clone(),
        ))
    }

    /// Location of a run's audio artifact.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if `file_name` is not a bare file name.
    pub fn audio_path(&self, run_id: RunId, file_name: &str) -> PictaleResult<PathBuf> {
        if Self::sanitize_file_name(file_name) != file_name {
            return Err(
                StorageError::new(StorageErrorKind::InvalidName(file_name.to_string())).into(),
            );
        }
        Ok(self.run_dir(run_id).join(file_name))
    }

    /// Read back a run's audio artifact.
    ///
    /// # Errors
    ///
    /// Returns `StorageErrorKind::NotFound` when the run has no audio.
    #[tracing::instrument(skip(self), fields(run_id = %run_id))]
    pub async fn read_audio(&self, run_id: RunId, file_name: &str) -> PictaleResult<Vec<u8>> {
        let path = self.audio_path(run_id, file_name)?;

        let data = tokio::fs::read(&path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::read_failure(path.display(), &e))
        })?;

        tracing::debug!(path = %path.display(), size = data.len(), "Read audio artifact");
        Ok(data)
    }

    /// Delete everything stored for a run. A run with no directory is
    /// already removed.
    ///
    /// # Errors
    ///
    /// Returns `StorageErrorKind::Removal` if the directory exists but cannot
    /// be deleted.
    #[tracing::instrument(skip(self), fields(run_id = %run_id))]
    pub async fn remove_run(&self, run_id: RunId) -> PictaleResult<()> {
        let dir = self.run_dir(run_id);
        match tokio::fs::remove_dir_all(&dir).await {
            Ok(()) => {
                tracing::debug!(path = %dir.display(), "Removed run directory");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::new(StorageErrorKind::Removal {
                path: dir.display().to_string(),
                reason: e.to_string(),
            })
            .into()),
        }
    }

    /// Write to a temp file first, then rename for atomicity.
    async fn write_atomic(path: &Path, data: &[u8]) -> PictaleResult<()> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                StorageError::new(StorageErrorKind::DirectoryCreation {
                    path: parent.display().to_string(),
                    reason: e.to_string(),
                })
            })?;
        }

        let mut temp_name = path.as_os_str().to_owned();
        temp_name.push(".tmp");
        let temp_path = PathBuf::from(temp_name);

        let write_failed = |e: std::io::Error| {
            StorageError::new(StorageErrorKind::FileWrite {
                path: path.display().to_string(),
                reason: e.to_string(),
            })
        };
        tokio::fs::write(&temp_path, data)
            .await
            .map_err(write_failed)?;
        if let Err(e) = tokio::fs::rename(&temp_path, path).await {
            if let Err(cleanup) = tokio::fs::remove_file(&temp_path).await {
                tracing::warn!(
                    path = %temp_path.display(),
                    error = %cleanup,
                    "Failed to remove temp file"
                );
            }
            return Err(write_failed(e).into());
        }

        Ok(())
    }
}
