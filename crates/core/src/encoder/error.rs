//! Error types for the encoder module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while encoding a single file.
///
/// These are recorded per file by the batch runner and never abort a run.
#[derive(Debug, Error)]
pub enum EncoderError {
    /// FFmpeg binary not found on the search path.
    #[error("ffmpeg not found at path: {path}")]
    FfmpegNotFound { path: PathBuf },

    /// FFmpeg does not know the requested encoder library.
    #[error("ffmpeg does not support encoder '{codec}'")]
    UnsupportedCodec { codec: String },

    /// The encoder exited with a nonzero status.
    #[error("ffmpeg exited with status {exit_code:?}: {stderr}")]
    EncodeFailed {
        exit_code: Option<i32>,
        stderr: String,
    },

    /// The encode exceeded the configured timeout.
    #[error("encode timed out after {timeout_secs} seconds")]
    Timeout { timeout_secs: u64 },

    /// The computed output path collides with an input and no free name exists.
    #[error("cannot derive a collision-free output name for: {path}")]
    NamingConflict { path: PathBuf },

    /// I/O error while driving the encoder.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl EncoderError {
    /// Creates an encode-failed error from an exit code and captured stderr.
    pub fn encode_failed(exit_code: Option<i32>, stderr: impl Into<String>) -> Self {
        Self::EncodeFailed {
            exit_code,
            stderr: stderr.into(),
        }
    }

    /// Whether this error means the encoder binary itself is unusable,
    /// as opposed to one input being bad.
    pub fn is_environmental(&self) -> bool {
        matches!(
            self,
            Self::FfmpegNotFound { .. } | Self::UnsupportedCodec { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_failed_message_carries_stderr() {
        let err = EncoderError::encode_failed(Some(1), "Invalid data found");
        let message = err.to_string();
        assert!(message.contains("Invalid data found"));
        assert!(message.contains('1'));
    }

    #[test]
    fn test_environmental_classification() {
        assert!(EncoderError::FfmpegNotFound {
            path: PathBuf::from("ffmpeg")
        }
        .is_environmental());
        assert!(!EncoderError::Timeout { timeout_secs: 5 }.is_environmental());
    }
}
