//! Mock encoder for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::encoder::{EncodeJob, EncodeResult, Encoder, EncoderError};

/// Mock implementation of the [`Encoder`] trait.
///
/// Provides controllable behavior for testing:
/// - record submitted jobs for assertions
/// - fail specific inputs with a canned diagnostic
/// - simulate a missing ffmpeg binary
/// - optionally create the output file, for skip/idempotence tests
///
/// # Example
///
/// ```rust,ignore
/// use audiopress_core::testing::MockEncoder;
///
/// let encoder = MockEncoder::new();
/// encoder.fail_input("/music/bad.wav", "corrupt header").await;
///
/// let summary = convert_directory(root, &options, &encoder).await?;
///
/// let jobs = encoder.recorded_jobs().await;
/// assert_eq!(jobs.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct MockEncoder {
    /// Jobs submitted so far, in order.
    jobs: Arc<RwLock<Vec<EncodeJob>>>,
    /// Input paths that should fail, with their diagnostic.
    failures: Arc<RwLock<HashMap<PathBuf, String>>>,
    /// When true every call fails as if ffmpeg were absent.
    binary_missing: Arc<RwLock<bool>>,
    /// When true successful encodes create an empty output file.
    touch_outputs: Arc<RwLock<bool>>,
}

impl MockEncoder {
    /// Creates a new mock encoder that succeeds on every job.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes encodes for `input` fail with the given diagnostic.
    pub async fn fail_input(&self, input: impl Into<PathBuf>, message: impl Into<String>) {
        self.failures
            .write()
            .await
            .insert(input.into(), message.into());
    }

    /// Simulates an absent ffmpeg binary.
    pub async fn set_binary_missing(&self, missing: bool) {
        *self.binary_missing.write().await = missing;
    }

    /// Makes successful encodes write an empty output file.
    pub async fn set_touch_outputs(&self, touch: bool) {
        *self.touch_outputs.write().await = touch;
    }

    /// Returns the jobs submitted so far.
    pub async fn recorded_jobs(&self) -> Vec<EncodeJob> {
        self.jobs.read().await.clone()
    }

    fn missing_error() -> EncoderError {
        EncoderError::FfmpegNotFound {
            path: PathBuf::from("ffmpeg"),
        }
    }
}

#[async_trait]
impl Encoder for MockEncoder {
    fn name(&self) -> &str {
        "mock"
    }

    async fn encode(&self, job: EncodeJob) -> Result<EncodeResult, EncoderError> {
        if *self.binary_missing.read().await {
            return Err(Self::missing_error());
        }

        if let Some(message) = self.failures.read().await.get(&job.input_path) {
            return Err(EncoderError::encode_failed(Some(1), message.clone()));
        }

        if *self.touch_outputs.read().await {
            tokio::fs::write(&job.output_path, b"").await?;
        }

        let output_path = job.output_path.clone();
        self.jobs.write().await.push(job);

        Ok(EncodeResult {
            output_path,
            duration_ms: 0,
        })
    }

    async fn validate(&self) -> Result<(), EncoderError> {
        if *self.binary_missing.read().await {
            return Err(Self::missing_error());
        }
        Ok(())
    }
}

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::encoder::{Codec, EncodeJob};
    use std::path::Path;

    /// Creates an encode job with reasonable defaults.
    pub fn encode_job(input: &Path, codec: Codec) -> EncodeJob {
        EncodeJob {
            input_path: input.to_path_buf(),
            output_path: input.with_extension(codec.extension()),
            codec,
            bitrate: codec.default_bitrate().to_string(),
            channels: None,
            sample_rate: None,
        }
    }
}
