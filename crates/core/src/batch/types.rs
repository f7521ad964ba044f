//! Types for the batch module.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// An input file paired with its derived output path.
///
/// The output is always a sibling of the input, differing only in extension
/// and stem sanitization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    /// Source audio file.
    pub input_path: PathBuf,
    /// Companion output beside it.
    pub output_path: PathBuf,
}

/// Why a candidate was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The output already exists and overwrite was not requested.
    OutputExists,
    /// The output path equals the input path; converting would be a no-op.
    SelfConversion,
    /// Dry-run mode; the file would have been converted.
    DryRun,
}

/// A recorded per-file failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileFailure {
    /// The input file the failure belongs to.
    pub path: PathBuf,
    /// Diagnostic message, typically an ffmpeg stderr tail.
    pub message: String,
}

impl FileFailure {
    /// Creates a failure record for a path.
    pub fn new(path: &Path, message: impl Into<String>) -> Self {
        Self {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }
}

/// Outcome of processing one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionOutcome {
    /// The encoder produced the output file.
    Converted,
    /// The candidate was not encoded.
    Skipped(SkipReason),
    /// The encoder was invoked and failed.
    Failed(FileFailure),
}

/// Aggregated results from a conversion run.
///
/// Created empty at the start of a run, mutated once per candidate, returned
/// to the caller. Purely additive; nothing is ever removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionSummary {
    /// Files the encoder successfully converted.
    pub converted: u64,
    /// Files a dry run would have converted.
    pub planned: u64,
    /// Files skipped because the output existed or was the input itself.
    pub skipped: u64,
    /// Files the encoder failed on.
    pub failed: u64,
    /// One record per failure, in discovery order.
    pub errors: Vec<FileFailure>,
}

impl ConversionSummary {
    /// Records one outcome.
    pub fn record(&mut self, outcome: ConversionOutcome) {
        match outcome {
            ConversionOutcome::Converted => self.converted += 1,
            ConversionOutcome::Skipped(SkipReason::DryRun) => self.planned += 1,
            ConversionOutcome::Skipped(_) => self.skipped += 1,
            ConversionOutcome::Failed(failure) => {
                self.failed += 1;
                self.errors.push(failure);
            }
        }
    }

    /// Candidates for which the encoder was actually invoked.
    pub fn attempted(&self) -> u64 {
        self.converted + self.failed
    }

    /// Total candidates processed.
    pub fn total(&self) -> u64 {
        self.converted + self.planned + self.skipped + self.failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_buckets() {
        let mut summary = ConversionSummary::default();
        summary.record(ConversionOutcome::Converted);
        summary.record(ConversionOutcome::Skipped(SkipReason::OutputExists));
        summary.record(ConversionOutcome::Skipped(SkipReason::SelfConversion));
        summary.record(ConversionOutcome::Skipped(SkipReason::DryRun));
        summary.record(ConversionOutcome::Failed(FileFailure::new(
            Path::new("/music/bad.wav"),
            "boom",
        )));

        assert_eq!(summary.converted, 1);
        assert_eq!(summary.skipped, 2);
        assert_eq!(summary.planned, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.errors.len(), 1);
        assert_eq!(summary.attempted(), 2);
        assert_eq!(summary.total(), 5);
    }

    #[test]
    fn test_errors_preserve_order() {
        let mut summary = ConversionSummary::default();
        for name in ["a.wav", "b.wav", "c.wav"] {
            summary.record(ConversionOutcome::Failed(FileFailure::new(
                Path::new(name),
                "boom",
            )));
        }
        let recorded: Vec<_> = summary
            .errors
            .iter()
            .map(|f| f.path.display().to_string())
            .collect();
        assert_eq!(recorded, vec!["a.wav", "b.wav", "c.wav"]);
    }
}
