//! Utility functions shared by the export and index pipelines

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use sha2::{Digest, Sha256};

use crate::constants as C;

/// Characters that are invalid in filenames on at least one supported platform
static INVALID_FILENAME_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[<>:"/\\|?*]"#).unwrap());

/// Sanitize a string for use as a filename
///
/// Replaces each invalid character with an underscore, strips leading and
/// trailing dots and spaces, and truncates to 200 characters.
pub fn sanitize_filename(name: &str) -> String {
    let replaced = INVALID_FILENAME_CHARS.replace_all(name, "_");
    let trimmed = replaced.trim_matches(|c| c == '.' || c == ' ');
    trimmed.chars().take(C::MAX_FILENAME_LENGTH).collect()
}

/// Display a path with forward slashes (cross-platform standard)
///
/// Converts Windows backslashes to forward slashes for consistent output.
pub fn display_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Short SHA256 content hash, used to disambiguate colliding export filenames
pub fn short_content_hash(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let hash = format!("{:x}", hasher.finalize());
    hash.chars().take(C::HASH_ABBREVIATION_LENGTH).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_sanitize_replaces_invalid_characters() {
        assert_eq!(sanitize_filename("Q&A: What now?"), "Q&A_ What now_");
        assert_eq!(sanitize_filename("a/b\\c"), "a_b_c");
        assert_eq!(sanitize_filename("<tag>|\"quoted\"*"), "_tag___quoted__");
    }

    #[test]
    fn test_sanitize_strips_dots_and_spaces() {
        assert_eq!(sanitize_filename("  .hidden. "), "hidden");
        assert_eq!(sanitize_filename("...name..."), "name");
        // Interior dots and spaces survive
        assert_eq!(sanitize_filename("a. b.md"), "a. b.md");
    }

    #[test]
    fn test_sanitize_truncates_to_limit() {
        let long = "x".repeat(300);
        assert_eq!(sanitize_filename(&long).chars().count(), 200);
    }

    #[test]
    fn test_sanitize_truncates_characters_not_bytes() {
        let long = "é".repeat(300);
        assert_eq!(sanitize_filename(&long).chars().count(), 200);
    }

    #[test]
    fn test_display_path_forward_slashes() {
        let path = PathBuf::from("Devotionals").join("note.md");
        let displayed = display_path(&path);
        assert!(!displayed.contains('\\'));
        assert!(displayed.contains('/'));
    }

    #[test]
    fn test_short_content_hash_is_stable() {
        let a = short_content_hash("same content");
        let b = short_content_hash("same content");
        assert_eq!(a, b);
        assert_eq!(a.len(), 12);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_short_content_hash_differs_per_content() {
        assert_ne!(short_content_hash("one"), short_content_hash("two"));
    }
}
