//! Trait definitions for the encoder module.

use async_trait::async_trait;

use super::error::EncoderError;
use super::types::{EncodeJob, EncodeResult};

/// An encoder that can produce companion compressed files.
///
/// The batch runner is generic over this trait so tests can drive it with
/// [`crate::testing::MockEncoder`] instead of a real ffmpeg binary.
#[async_trait]
pub trait Encoder: Send + Sync {
    /// Returns the name of this encoder implementation.
    fn name(&self) -> &str;

    /// Encodes a single file according to the job specification.
    async fn encode(&self, job: EncodeJob) -> Result<EncodeResult, EncoderError>;

    /// Validates that the encoder is properly configured and ready.
    async fn validate(&self) -> Result<(), EncoderError>;
}
