//! Testing utilities and mock implementations.
//!
//! This module provides a mock [`crate::encoder::Encoder`] so batch behavior
//! can be tested without a real ffmpeg binary.

mod mock_encoder;

pub use mock_encoder::{fixtures, MockEncoder};
