//! Shared command-line surface for the per-codec binaries.
//!
//! `press-opus` and `press-aac` parse the same option schema; only the codec
//! they hand to the batch runner differs.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use audiopress_core::{
    convert_directory, Codec, ConversionOptions, ConversionSummary, Encoder, EncoderConfig,
    FfmpegEncoder,
};

/// Options shared by both codec commands.
#[derive(Parser, Debug)]
#[command(
    version,
    max_term_width = 80,
    about = "Produce compressed companion encodes for the audio files in a directory"
)]
pub struct ConvertArgs {
    /// Directory containing audio files to convert.
    pub directory: PathBuf,

    /// Glob patterns for input files. Defaults to the common audio extensions.
    #[arg(long, num_args = 1.., value_name = "GLOB")]
    pub patterns: Option<Vec<String>>,

    /// Target bitrate, e.g. "24k". Defaults to the codec's standard rate.
    #[arg(long)]
    pub bitrate: Option<String>,

    /// Channel count for the output audio. Defaults to the source layout.
    #[arg(long)]
    pub channels: Option<u32>,

    /// Force mono output. Cannot be combined with --channels.
    #[arg(long, conflicts_with = "channels")]
    pub mono: bool,

    /// Sample rate for the output audio in Hz. Defaults to the source rate.
    #[arg(long)]
    pub sample_rate: Option<u32>,

    /// Process subdirectories recursively.
    #[arg(long)]
    pub recursive: bool,

    /// Overwrite existing outputs.
    #[arg(long)]
    pub overwrite: bool,

    /// Show planned actions without running ffmpeg.
    #[arg(long)]
    pub dry_run: bool,

    /// Per-file encoder timeout in seconds.
    #[arg(long, default_value_t = 600, value_name = "SECS")]
    pub timeout: u64,
}

impl ConvertArgs {
    /// Maps the parsed arguments onto batch options for a codec.
    pub fn to_options(&self, codec: Codec) -> ConversionOptions {
        let mut options = ConversionOptions::new(codec);
        if let Some(patterns) = &self.patterns {
            options.patterns = patterns.clone();
        }
        options.recursive = self.recursive;
        options.bitrate = self.bitrate.clone();
        options.channels = if self.mono { Some(1) } else { self.channels };
        options.sample_rate = self.sample_rate;
        options.overwrite = self.overwrite;
        options.dry_run = self.dry_run;
        options
    }
}

/// Initializes logging from `RUST_LOG`, defaulting to info.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Runs one batch for the given codec and returns the process exit code.
pub async fn run(codec: Codec, args: ConvertArgs) -> Result<i32> {
    let options = args.to_options(codec);
    let encoder = FfmpegEncoder::new(EncoderConfig::default().with_timeout(args.timeout));

    // A broken encoder setup is reported up front but stays non-fatal:
    // each candidate still gets its own recorded failure.
    if let Err(err) = encoder.validate().await {
        warn!("encoder validation failed: {}", err);
    }

    let summary = convert_directory(&args.directory, &options, &encoder)
        .await
        .with_context(|| format!("failed to process '{}'", args.directory.display()))?;

    print_summary(&summary, options.dry_run);
    Ok(exit_code(&summary))
}

fn print_summary(summary: &ConversionSummary, dry_run: bool) {
    if !summary.errors.is_empty() {
        eprintln!("\nFailures:");
        for failure in &summary.errors {
            eprintln!("  {}: {}", failure.path.display(), failure.message);
        }
    }

    println!("\nDone.");
    if dry_run {
        println!("Would convert: {} file(s)", summary.planned);
    } else {
        println!("Converted: {} file(s)", summary.converted);
    }
    println!("Skipped:   {} file(s)", summary.skipped);
    println!("Failed:    {} file(s)", summary.failed);
}

/// Exit-code policy: 0 when anything succeeded or nothing was attempted,
/// 1 when every attempted conversion failed. Argument and root errors exit 2
/// before this is reached.
pub fn exit_code(summary: &ConversionSummary) -> i32 {
    if summary.attempted() > 0 && summary.converted == 0 && summary.failed > 0 {
        1
    } else {
        0
    }
}
