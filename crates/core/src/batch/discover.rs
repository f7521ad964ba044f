//! Candidate file discovery.

use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

use super::error::BatchError;

fn build_glob_set(patterns: &[String]) -> Result<GlobSet, BatchError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|e| BatchError::InvalidPattern {
            pattern: pattern.clone(),
            reason: e.to_string(),
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|e| BatchError::InvalidPattern {
        pattern: patterns.join(" "),
        reason: e.to_string(),
    })
}

/// Returns the files under `root` whose names match at least one pattern.
///
/// Non-recursive discovery scans only the immediate children of `root`.
/// Symbolic links are not followed, so link cycles cannot loop the walk.
/// The result is sorted lexicographically and deduplicated so repeated runs
/// and dry-run output are reproducible.
pub fn discover(
    root: &Path,
    patterns: &[String],
    recursive: bool,
) -> Result<Vec<PathBuf>, BatchError> {
    if !root.is_dir() {
        return Err(BatchError::RootNotFound {
            path: root.to_path_buf(),
        });
    }

    let glob_set = build_glob_set(patterns)?;

    let walker = if recursive {
        WalkDir::new(root)
    } else {
        WalkDir::new(root).max_depth(1)
    };

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                // An unreadable root aborts the run; unreadable subdirectories
                // are reported and skipped.
                if err.path() == Some(root) {
                    return Err(match err.into_io_error() {
                        Some(io) => BatchError::Io(io),
                        None => BatchError::RootNotFound {
                            path: root.to_path_buf(),
                        },
                    });
                }
                warn!("skipping unreadable entry: {}", err);
                continue;
            }
        };

        if entry.file_type().is_file() && glob_set.is_match(entry.file_name()) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    files.dedup();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, b"").unwrap();
        path
    }

    fn patterns(list: &[&str]) -> Vec<String> {
        list.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn test_discover_respects_recursion() {
        let dir = TempDir::new().unwrap();
        let track1 = touch(dir.path(), "track1.wav");
        touch(dir.path(), "track2.mp3");
        let nested = dir.path().join("nested");
        fs::create_dir(&nested).unwrap();
        let hidden = touch(&nested, "hidden.flac");

        let flat = discover(dir.path(), &patterns(&["*.wav", "*.flac"]), false).unwrap();
        assert!(flat.contains(&track1));
        assert!(!flat.contains(&hidden));

        let deep = discover(dir.path(), &patterns(&["*.wav", "*.flac"]), true).unwrap();
        assert!(deep.contains(&hidden));
    }

    #[test]
    fn test_discover_matches_only_named_patterns() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "song.wav");
        touch(dir.path(), "notes.txt");
        touch(dir.path(), "cover.jpg");

        let found = discover(dir.path(), &patterns(&["*.wav"]), false).unwrap();
        assert_eq!(found.len(), 1);
        assert!(found[0].ends_with("song.wav"));
    }

    #[test]
    fn test_discover_is_sorted_and_deduplicated() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "b.wav");
        touch(dir.path(), "a.wav");
        touch(dir.path(), "c.wav");

        // Overlapping patterns must not produce duplicates.
        let found = discover(dir.path(), &patterns(&["*.wav", "a.*", "*a*"]), false).unwrap();
        let names: Vec<_> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.wav", "b.wav", "c.wav"]);
    }

    #[test]
    fn test_discover_skips_directories_matching_patterns() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("archive.wav")).unwrap();
        touch(dir.path(), "real.wav");

        let found = discover(dir.path(), &patterns(&["*.wav"]), false).unwrap();
        assert_eq!(found.len(), 1);
        assert!(found[0].ends_with("real.wav"));
    }

    #[test]
    fn test_discover_missing_root() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        let err = discover(&missing, &patterns(&["*.wav"]), false).unwrap_err();
        assert!(matches!(err, BatchError::RootNotFound { .. }));
    }

    #[test]
    fn test_discover_root_must_be_a_directory() {
        let dir = TempDir::new().unwrap();
        let file = touch(dir.path(), "not-a-dir.wav");
        let err = discover(&file, &patterns(&["*.wav"]), false).unwrap_err();
        assert!(matches!(err, BatchError::RootNotFound { .. }));
    }

    #[test]
    fn test_discover_rejects_invalid_pattern() {
        let dir = TempDir::new().unwrap();
        let err = discover(dir.path(), &patterns(&["*.{wav"]), false).unwrap_err();
        assert!(matches!(err, BatchError::InvalidPattern { .. }));
    }

    #[test]
    fn test_discover_is_case_sensitive() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "loud.WAV");
        touch(dir.path(), "quiet.wav");

        let found = discover(dir.path(), &patterns(&["*.wav"]), false).unwrap();
        assert_eq!(found.len(), 1);
        assert!(found[0].ends_with("quiet.wav"));
    }
}
