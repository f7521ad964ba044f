//! Per-candidate conversion planning.

use super::types::CandidateFile;

/// What to do with one candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Invoke the encoder.
    Proceed,
    /// Output already exists and overwrite was not requested.
    SkipExists,
    /// Output path equals the input path; self-conversion is a no-op.
    SkipSelf,
    /// Dry run; the candidate would have been converted.
    SkipDryRun,
}

/// Decides whether a candidate needs an encode.
///
/// The existence check races benignly with other writers; if the output
/// appears between this check and the encode, the encoder failure is recorded
/// as a per-file outcome rather than aborting the run.
pub fn plan(candidate: &CandidateFile, overwrite: bool, dry_run: bool) -> Decision {
    if !overwrite && candidate.output_path.exists() {
        return Decision::SkipExists;
    }
    if candidate.output_path == candidate.input_path {
        return Decision::SkipSelf;
    }
    if dry_run {
        return Decision::SkipDryRun;
    }
    Decision::Proceed
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn candidate(dir: &TempDir, input: &str, output: &str) -> CandidateFile {
        CandidateFile {
            input_path: dir.path().join(input),
            output_path: dir.path().join(output),
        }
    }

    #[test]
    fn test_fresh_output_proceeds() {
        let dir = TempDir::new().unwrap();
        let c = candidate(&dir, "a.wav", "a.opus");
        assert_eq!(plan(&c, false, false), Decision::Proceed);
    }

    #[test]
    fn test_existing_output_skips_without_overwrite() {
        let dir = TempDir::new().unwrap();
        let c = candidate(&dir, "a.wav", "a.opus");
        fs::write(&c.output_path, b"already here").unwrap();

        assert_eq!(plan(&c, false, false), Decision::SkipExists);
        assert_eq!(plan(&c, true, false), Decision::Proceed);
    }

    #[test]
    fn test_self_conversion_is_a_noop() {
        let path = PathBuf::from("/music/track.opus");
        let c = CandidateFile {
            input_path: path.clone(),
            output_path: path,
        };
        // Even with overwrite the candidate must never encode onto itself.
        assert_eq!(plan(&c, true, false), Decision::SkipSelf);
    }

    #[test]
    fn test_dry_run_never_proceeds() {
        let dir = TempDir::new().unwrap();
        let c = candidate(&dir, "a.wav", "a.opus");
        assert_eq!(plan(&c, false, true), Decision::SkipDryRun);

        // Exists-skip still wins over the dry-run report.
        fs::write(&c.output_path, b"").unwrap();
        assert_eq!(plan(&c, false, true), Decision::SkipExists);
    }
}
