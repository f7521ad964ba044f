//! Batch conversion runner.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::encoder::{EncodeJob, Encoder, EncoderError};

use super::config::ConversionOptions;
use super::discover::discover;
use super::error::BatchError;
use super::namer::{numbered_output_path, output_path};
use super::planner::{plan, Decision};
use super::types::{CandidateFile, ConversionOutcome, ConversionSummary, FileFailure, SkipReason};

/// Bound on deterministic renaming when two inputs derive the same output.
const MAX_NAME_ATTEMPTS: u32 = 1000;

/// Derives and claims an output path for `input`, unique within this run.
///
/// A self-conversion path is returned unclaimed; the planner skips it.
/// Intra-run collisions get a `-2`, `-3`, ... stem suffix.
fn claim_output(
    input: &Path,
    extension: &str,
    claimed: &mut HashSet<PathBuf>,
) -> Result<PathBuf, EncoderError> {
    let first = output_path(input, extension);
    if first == *input || claimed.insert(first.clone()) {
        return Ok(first);
    }

    for n in 2..=MAX_NAME_ATTEMPTS {
        let alternative = numbered_output_path(input, extension, n);
        if claimed.insert(alternative.clone()) {
            return Ok(alternative);
        }
    }

    Err(EncoderError::NamingConflict {
        path: input.to_path_buf(),
    })
}

/// Converts the matching audio files within `root`.
///
/// Discovers candidates, plans each one, and drives the encoder for those
/// that proceed. Per-file encoder failures are recorded in the summary and
/// never abort the batch; only directory-level errors propagate.
pub async fn convert_directory<E>(
    root: &Path,
    options: &ConversionOptions,
    encoder: &E,
) -> Result<ConversionSummary, BatchError>
where
    E: Encoder + ?Sized,
{
    let inputs = discover(root, &options.patterns, options.recursive)?;
    info!(
        root = %root.display(),
        candidates = inputs.len(),
        "starting {} batch",
        encoder.name()
    );

    let extension = options.codec.extension();
    let bitrate = options.effective_bitrate();

    let mut summary = ConversionSummary::default();
    let mut claimed: HashSet<PathBuf> = HashSet::new();

    for input in inputs {
        let output = match claim_output(&input, extension, &mut claimed) {
            Ok(output) => output,
            Err(err) => {
                warn!(input = %input.display(), "naming failed: {}", err);
                summary.record(ConversionOutcome::Failed(FileFailure::new(
                    &input,
                    err.to_string(),
                )));
                continue;
            }
        };

        let candidate = CandidateFile {
            input_path: input,
            output_path: output,
        };

        match plan(&candidate, options.overwrite, options.dry_run) {
            Decision::SkipExists => {
                info!(
                    input = %candidate.input_path.display(),
                    "skipping, {} already exists",
                    candidate.output_path.display()
                );
                summary.record(ConversionOutcome::Skipped(SkipReason::OutputExists));
            }
            Decision::SkipSelf => {
                debug!(input = %candidate.input_path.display(), "skipping self-conversion");
                summary.record(ConversionOutcome::Skipped(SkipReason::SelfConversion));
            }
            Decision::SkipDryRun => {
                info!(
                    input = %candidate.input_path.display(),
                    output = %candidate.output_path.display(),
                    "would convert"
                );
                summary.record(ConversionOutcome::Skipped(SkipReason::DryRun));
            }
            Decision::Proceed => {
                info!(
                    input = %candidate.input_path.display(),
                    output = %candidate.output_path.display(),
                    "converting"
                );
                let job = EncodeJob {
                    input_path: candidate.input_path.clone(),
                    output_path: candidate.output_path.clone(),
                    codec: options.codec,
                    bitrate: bitrate.clone(),
                    channels: options.channels,
                    sample_rate: options.sample_rate,
                };
                match encoder.encode(job).await {
                    Ok(_) => summary.record(ConversionOutcome::Converted),
                    Err(err) => {
                        warn!(input = %candidate.input_path.display(), "encode failed: {}", err);
                        summary.record(ConversionOutcome::Failed(FileFailure::new(
                            &candidate.input_path,
                            err.to_string(),
                        )));
                    }
                }
            }
        }
    }

    info!(
        converted = summary.converted,
        planned = summary.planned,
        skipped = summary.skipped,
        failed = summary.failed,
        "batch finished"
    );
    Ok(summary)
}
