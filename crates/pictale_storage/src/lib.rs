//! Per-run artifact storage for Pictale.
//!
//! Every pipeline invocation gets its own directory keyed by [`RunId`], so
//! uploads and narrations from concurrent runs never overwrite each other:
//!
//! ```text
//! {base_dir}/runs/
//! ├── 0b5e…/
//! │   ├── image/cat.jpg
//! │   └── generated_audio.flac
//! └── 9f12…/
//!     ├── image/cat.jpg
//!     └── generated_audio.flac
//! ```
//!
//! Writes go to a temporary file that is renamed into place, so a reader
//! never observes a partially written artifact.
//!
//! # Example
//!
//! ```rust
//! use pictale_core::{AudioArtifact, RunId};
//! use pictale_storage::ArtifactStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = ArtifactStore::new("/tmp/pictale")?;
//! let run_id = RunId::new();
//!
//! let image = store.store_upload(run_id, "cat.jpg", &[0xFF, 0xD8, 0xFF]).await?;
//! let audio = AudioArtifact::new(vec![1, 2, 3], "audio/flac");
//! let reference = store.store_audio(run_id, &audio, "generated_audio.flac").await?;
//! assert_eq!(*reference.size_bytes(), 3);
//! # Ok(())
//! # }
//! ```
//!
//! [`RunId`]: pictale_core::RunId

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod filesystem;

pub use filesystem::{ArtifactStore, content_hash};
