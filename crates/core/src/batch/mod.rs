//! Batch conversion of a directory tree.
//!
//! This module discovers candidate audio files under a root directory,
//! decides per file whether a companion encode is needed, drives an
//! [`crate::encoder::Encoder`] for those that proceed, and aggregates the
//! outcomes into a [`ConversionSummary`].
//!
//! # Example
//!
//! ```ignore
//! use audiopress_core::batch::{convert_directory, ConversionOptions};
//! use audiopress_core::encoder::{Codec, FfmpegEncoder};
//!
//! let options = ConversionOptions::new(Codec::Opus).with_recursive(true);
//! let encoder = FfmpegEncoder::with_defaults();
//!
//! let summary = convert_directory(Path::new("/music"), &options, &encoder).await?;
//! println!("converted {} files", summary.converted);
//! ```

mod config;
mod discover;
mod error;
mod namer;
mod planner;
mod runner;
mod types;

pub use config::ConversionOptions;
pub use discover::discover;
pub use error::BatchError;
pub use namer::output_path;
pub use planner::{plan, Decision};
pub use runner::convert_directory;
pub use types::{CandidateFile, ConversionOutcome, ConversionSummary, FileFailure, SkipReason};
