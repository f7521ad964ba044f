//! Encoder module for producing companion compressed files.
//!
//! This module provides the `Encoder` trait and the ffmpeg-backed
//! implementation used to encode a single audio file to Opus or AAC.
//!
//! # Example
//!
//! ```ignore
//! use audiopress_core::encoder::{Codec, EncodeJob, Encoder, EncoderConfig, FfmpegEncoder};
//!
//! let encoder = FfmpegEncoder::with_defaults();
//!
//! // Validate ffmpeg is available
//! encoder.validate().await?;
//!
//! let job = EncodeJob {
//!     input_path: PathBuf::from("/music/track.wav"),
//!     output_path: PathBuf::from("/music/track.opus"),
//!     codec: Codec::Opus,
//!     bitrate: Codec::Opus.default_bitrate().to_string(),
//!     channels: None,
//!     sample_rate: None,
//! };
//!
//! let result = encoder.encode(job).await?;
//! println!("Encoded in {} ms", result.duration_ms);
//! ```

mod config;
mod error;
mod ffmpeg;
mod traits;
mod types;

pub use config::EncoderConfig;
pub use error::EncoderError;
pub use ffmpeg::FfmpegEncoder;
pub use traits::Encoder;
pub use types::{Codec, EncodeJob, EncodeResult};
