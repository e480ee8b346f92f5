//! Synthesized audio values.

use crate::RunId;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Served when stored audio has no recognizable container signature.
pub const FALLBACK_AUDIO_TYPE: &str = "application/octet-stream";

/// Identify an encoded audio payload from its leading bytes.
///
/// ```
/// use pictale_core::sniff_audio_type;
///
/// assert_eq!(sniff_audio_type(b"fLaC\x00\x00\x00\x22"), Some("audio/flac"));
/// assert_eq!(sniff_audio_type(b"{\"error\":1}"), None);
/// ```
pub fn sniff_audio_type(data: &[u8]) -> Option<&'static str> {
    match data {
        [b'f', b'L', b'a', b'C', ..] => Some("audio/flac"),
        [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'A', b'V', b'E', ..] => Some("audio/wav"),
        [b'O', b'g', b'g', b'S', ..] => Some("audio/ogg"),
        [b'I', b'D', b'3', ..] => Some("audio/mpeg"),
        [0xFF, second, ..] if second & 0xE0 == 0xE0 => Some("audio/mpeg"),
        _ => None,
    }
}

/// Audio bytes returned by the speech service.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct AudioArtifact {
    /// Encoded audio payload
    data: Vec<u8>,
    /// MIME type reported by the service
    mime_type: String,
}

impl AudioArtifact {
    /// Wrap an audio payload.
    pub fn new(data: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            data,
            mime_type: mime_type.into(),
        }
    }

    /// Payload size in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True for an empty payload.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Where a run's audio artifact was persisted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct AudioArtifactRef {
    /// Run that produced the audio
    run_id: RunId,
    /// File path on disk
    path: PathBuf,
    /// Size in bytes
    size_bytes: u64,
    /// SHA-256 of the content, hex encoded
    content_hash: String,
    /// MIME type
    mime_type: String,
}

impl AudioArtifactRef {
    /// Describe a persisted artifact.
    pub fn new(
        run_id: RunId,
        path: PathBuf,
        size_bytes: u64,
        content_hash: String,
        mime_type: String,
    ) -> Self {
        Self {
            run_id,
            path,
            size_bytes,
            content_hash,
            mime_type,
        }
    }
}
