//! Types for the encoder module.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Target codec for companion encodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Codec {
    /// Opus (modern, efficient; good for speech at low bitrates)
    Opus,
    /// Advanced Audio Coding via the Fraunhofer library
    Aac,
}

impl Codec {
    /// Returns the file extension for this codec's output.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Opus => "opus",
            Self::Aac => "aac",
        }
    }

    /// Returns the ffmpeg encoder library name for this codec.
    pub fn ffmpeg_codec(&self) -> &'static str {
        match self {
            Self::Opus => "libopus",
            Self::Aac => "libfdk_aac",
        }
    }

    /// Returns the default target bitrate for this codec.
    pub fn default_bitrate(&self) -> &'static str {
        match self {
            Self::Opus => "24k",
            Self::Aac => "96k",
        }
    }

    /// Extra encoder flags that always accompany this codec.
    pub fn extra_codec_args(&self) -> &'static [&'static str] {
        match self {
            Self::Opus => &["-vbr", "on"],
            Self::Aac => &[],
        }
    }
}

/// A single-file encode request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodeJob {
    /// Source audio file.
    pub input_path: PathBuf,
    /// Companion output file, a sibling of the input.
    pub output_path: PathBuf,
    /// Target codec.
    pub codec: Codec,
    /// Effective bitrate, e.g. "24k".
    pub bitrate: String,
    /// Channel count override. None preserves the source layout.
    pub channels: Option<u32>,
    /// Sample rate override in Hz. None preserves the source rate.
    pub sample_rate: Option<u32>,
}

/// Result of a successful encode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncodeResult {
    /// Path of the file that was written.
    pub output_path: PathBuf,
    /// Wall-clock time the encode took.
    pub duration_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codec_mappings() {
        assert_eq!(Codec::Opus.extension(), "opus");
        assert_eq!(Codec::Opus.ffmpeg_codec(), "libopus");
        assert_eq!(Codec::Opus.default_bitrate(), "24k");
        assert_eq!(Codec::Aac.extension(), "aac");
        assert_eq!(Codec::Aac.ffmpeg_codec(), "libfdk_aac");
        assert_eq!(Codec::Aac.default_bitrate(), "96k");
    }

    #[test]
    fn test_opus_uses_vbr() {
        assert_eq!(Codec::Opus.extra_codec_args(), &["-vbr", "on"]);
        assert!(Codec::Aac.extra_codec_args().is_empty());
    }
}
