//! Options for a batch conversion run.

use serde::{Deserialize, Serialize};

use crate::encoder::Codec;

/// Glob patterns covering the common audio extensions.
fn default_patterns() -> Vec<String> {
    ConversionOptions::DEFAULT_PATTERNS
        .iter()
        .map(|p| p.to_string())
        .collect()
}

/// Options recognized by [`crate::batch::convert_directory`].
///
/// Constructed fresh per invocation; defaults live here rather than in any
/// process-wide state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionOptions {
    /// Glob patterns matched against candidate file names.
    #[serde(default = "default_patterns")]
    pub patterns: Vec<String>,

    /// Whether to descend into subdirectories.
    #[serde(default)]
    pub recursive: bool,

    /// Target bitrate, e.g. "24k". None uses the codec default.
    #[serde(default)]
    pub bitrate: Option<String>,

    /// Channel count override. None preserves the source layout.
    #[serde(default)]
    pub channels: Option<u32>,

    /// Sample rate override in Hz. None preserves the source rate.
    #[serde(default)]
    pub sample_rate: Option<u32>,

    /// Whether pre-existing outputs may be replaced.
    #[serde(default)]
    pub overwrite: bool,

    /// Report planned actions without writing anything.
    #[serde(default)]
    pub dry_run: bool,

    /// Target codec; determines extension, encoder library and default bitrate.
    pub codec: Codec,
}

impl ConversionOptions {
    /// Default input patterns: the common audio extensions.
    pub const DEFAULT_PATTERNS: [&'static str; 10] = [
        "*.wav", "*.mp3", "*.m4a", "*.flac", "*.aac", "*.ogg", "*.wma", "*.aiff", "*.aif",
        "*.aifc",
    ];

    /// Creates options for the given codec with all defaults.
    pub fn new(codec: Codec) -> Self {
        Self {
            patterns: default_patterns(),
            recursive: false,
            bitrate: None,
            channels: None,
            sample_rate: None,
            overwrite: false,
            dry_run: false,
            codec,
        }
    }

    /// Sets the input patterns.
    pub fn with_patterns(mut self, patterns: Vec<String>) -> Self {
        self.patterns = patterns;
        self
    }

    /// Enables recursive discovery.
    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Sets an explicit target bitrate.
    pub fn with_bitrate(mut self, bitrate: impl Into<String>) -> Self {
        self.bitrate = Some(bitrate.into());
        self
    }

    /// Sets the channel count override.
    pub fn with_channels(mut self, channels: u32) -> Self {
        self.channels = Some(channels);
        self
    }

    /// Sets the sample rate override.
    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = Some(sample_rate);
        self
    }

    /// Allows replacing pre-existing outputs.
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Enables dry-run mode.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// The bitrate this run will request: explicit value or codec default.
    pub fn effective_bitrate(&self) -> String {
        self.bitrate
            .clone()
            .unwrap_or_else(|| self.codec.default_bitrate().to_string())
    }
}
