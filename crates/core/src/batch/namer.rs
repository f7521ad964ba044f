//! Output path derivation.

use std::path::{Path, PathBuf};

/// Characters rejected by at least one common filesystem.
fn is_unsafe(c: char) -> bool {
    matches!(c, '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*') || c.is_control()
}

fn sanitize_stem(stem: &str) -> String {
    stem.chars()
        .map(|c| if is_unsafe(c) { '_' } else { c })
        .collect()
}

/// Returns the companion output path for `input` with the target extension.
///
/// The output is a sibling of the input. Names that are already safe pass
/// through untouched; unsafe characters in the stem are replaced with `_`.
pub fn output_path(input: &Path, extension: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{}.{}", sanitize_stem(&stem), extension))
}

/// Returns the `n`-th alternative output name for `input`.
///
/// Used when two inputs derive the same output within one run; the suffix is
/// deterministic so repeated runs pick the same names.
pub fn numbered_output_path(input: &Path, extension: &str, n: u32) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{}-{}.{}", sanitize_stem(&stem), n, extension))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_names_pass_through() {
        let output = output_path(Path::new("/music/My Cool-Track.WAV"), "opus");
        assert_eq!(output, PathBuf::from("/music/My Cool-Track.opus"));
    }

    #[test]
    fn test_unsafe_characters_are_replaced() {
        let output = output_path(Path::new("/music/what? loud*.wav"), "opus");
        assert_eq!(output, PathBuf::from("/music/what_ loud_.opus"));
    }

    #[test]
    fn test_output_is_a_sibling() {
        let output = output_path(Path::new("/a/b/c/track.flac"), "aac");
        assert_eq!(output.parent(), Some(Path::new("/a/b/c")));
    }

    #[test]
    fn test_self_conversion_maps_to_itself() {
        let input = Path::new("/music/track.opus");
        assert_eq!(output_path(input, "opus"), input);
    }

    #[test]
    fn test_numbered_alternative() {
        let output = numbered_output_path(Path::new("/music/track.wav"), "opus", 2);
        assert_eq!(output, PathBuf::from("/music/track-2.opus"));
    }
}
