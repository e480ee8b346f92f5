//! Test utilities for model client tests.
//!
//! Provides an in-process HTTP server that answers every request with a
//! canned response and records what it received.

#![allow(dead_code)]

pub mod mock_server;

#[allow(unused_imports)]
pub use mock_server::{CannedResponse, MockServer, RecordedRequest};

/// A minimal JPEG header followed by filler bytes.
pub fn jpeg_bytes() -> Vec<u8> {
    let mut data = vec![0xFF, 0xD8, 0xFF, 0xE0];
    data.extend_from_slice(b"not-really-a-photo");
    data
}
