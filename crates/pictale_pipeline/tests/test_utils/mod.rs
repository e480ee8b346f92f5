//! Test utilities for pipeline tests.
//!
//! Mock stage implementations that count calls and record their inputs.

#![allow(dead_code)]

pub mod mock_stages;

#[allow(unused_imports)]
pub use mock_stages::{MockCaptioner, MockGenerator, MockSynthesizer};

use pictale_config::PictaleConfig;
use std::path::Path;

/// A minimal JPEG header followed by filler bytes.
pub fn jpeg_bytes() -> Vec<u8> {
    let mut data = vec![0xFF, 0xD8, 0xFF, 0xE0];
    data.extend_from_slice(b"cat-photo-bytes");
    data
}

/// Default configuration with storage rooted at `base_dir`.
pub fn test_config(base_dir: &Path) -> PictaleConfig {
    let mut config = PictaleConfig::default();
    config.storage.base_dir = base_dir.to_path_buf();
    config
}
