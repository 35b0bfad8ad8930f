//! Note records, the canonical per-document entity of the index
//!
//! A record is built once per scanned document and is immutable afterwards.
//! Missing metadata resolves through defaults, never errors.

use std::path::Path;

use serde::Serialize;

use crate::constants as C;
use crate::frontmatter::Metadata;
use crate::util;

/// One indexed note
///
/// Field order matches the serialized index document.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NoteRecord {
    pub title: String,
    pub subtitle: String,
    pub author: String,
    pub collection: String,
    pub date: String,
    pub created: String,
    pub updated: String,
    /// Path relative to the notes root, forward slashes on every platform
    pub file_path: String,
    pub color: String,
    /// First 200 characters of the body, plus `...` when truncated
    pub preview: String,
    /// Full body, unmodified
    pub content: String,
}

impl NoteRecord {
    /// Build a record from a parsed document
    ///
    /// `path` must lie under `notes_root`; the relative portion becomes
    /// `file_path` and the immediate parent directory names the collection.
    /// The title falls back to the file stem when the metadata carries none.
    pub fn build(path: &Path, notes_root: &Path, metadata: &Metadata, body: &str) -> NoteRecord {
        let relative = path.strip_prefix(notes_root).unwrap_or(path);

        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        let collection = path
            .parent()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        NoteRecord {
            title: field(metadata, "title").unwrap_or(stem),
            subtitle: field(metadata, "subtitle").unwrap_or_default(),
            author: field(metadata, "author").unwrap_or_default(),
            collection,
            date: field(metadata, "date").unwrap_or_default(),
            created: field(metadata, "created").unwrap_or_default(),
            updated: field(metadata, "updated").unwrap_or_default(),
            file_path: util::display_path(relative),
            color: field(metadata, "color").unwrap_or_else(|| C::DEFAULT_NOTE_COLOR.to_string()),
            preview: preview_of(body),
            content: body.to_string(),
        }
    }
}

fn field(metadata: &Metadata, key: &str) -> Option<String> {
    metadata.get(key).cloned()
}

/// First 200 characters of the body, ellipsized when longer
fn preview_of(body: &str) -> String {
    if body.chars().count() > C::PREVIEW_MAX_CHARS {
        let prefix: String = body.chars().take(C::PREVIEW_MAX_CHARS).collect();
        format!("{}{}", prefix, C::PREVIEW_ELLIPSIS)
    } else {
        body.to_string()
    }
}

/// True for the root-level summary file that is excluded from indexing
///
/// Only `README.md` directly under the notes root is skipped; same-named
/// files inside collection subfolders are indexed normally.
pub fn is_root_index(path: &Path, notes_root: &Path) -> bool {
    path.file_name()
        .map(|n| n == C::ROOT_INDEX_FILENAME)
        .unwrap_or(false)
        && path.parent() == Some(notes_root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn root() -> PathBuf {
        PathBuf::from("notes")
    }

    fn note_path(collection: &str, file: &str) -> PathBuf {
        root().join(collection).join(file)
    }

    #[test]
    fn test_build_applies_metadata() {
        let mut metadata = Metadata::new();
        metadata.insert("title".into(), "Hope".into());
        metadata.insert("subtitle".into(), "A Study".into());
        metadata.insert("author".into(), "Jane".into());
        metadata.insert("date".into(), "2024-05-01".into());
        metadata.insert("color".into(), "#FFAA00".into());

        let record = NoteRecord::build(
            &note_path("Devotionals", "hope.md"),
            &root(),
            &metadata,
            "Body text",
        );

        assert_eq!(record.title, "Hope");
        assert_eq!(record.subtitle, "A Study");
        assert_eq!(record.author, "Jane");
        assert_eq!(record.date, "2024-05-01");
        assert_eq!(record.color, "#FFAA00");
        assert_eq!(record.collection, "Devotionals");
        assert_eq!(record.file_path, "Devotionals/hope.md");
        assert_eq!(record.content, "Body text");
    }

    #[test]
    fn test_build_defaults_for_missing_metadata() {
        let record = NoteRecord::build(
            &note_path("Essays", "thoughts.md"),
            &root(),
            &Metadata::new(),
            "Body",
        );

        assert_eq!(record.title, "thoughts");
        assert_eq!(record.subtitle, "");
        assert_eq!(record.author, "");
        assert_eq!(record.date, "");
        assert_eq!(record.created, "");
        assert_eq!(record.updated, "");
        assert_eq!(record.color, C::DEFAULT_NOTE_COLOR);
    }

    #[test]
    fn test_build_empty_title_value_stays_empty() {
        // A present-but-empty key is not the same as a missing key
        let mut metadata = Metadata::new();
        metadata.insert("title".into(), "".into());

        let record =
            NoteRecord::build(&note_path("Essays", "named.md"), &root(), &metadata, "");
        assert_eq!(record.title, "");
    }

    #[test]
    fn test_preview_short_body_verbatim() {
        let record =
            NoteRecord::build(&note_path("A", "n.md"), &root(), &Metadata::new(), "short");
        assert_eq!(record.preview, "short");
    }

    #[test]
    fn test_preview_exactly_200_chars_untruncated() {
        let body = "x".repeat(200);
        let record =
            NoteRecord::build(&note_path("A", "n.md"), &root(), &Metadata::new(), &body);
        assert_eq!(record.preview, body);
    }

    #[test]
    fn test_preview_truncates_over_200_chars() {
        let body = "x".repeat(201);
        let record =
            NoteRecord::build(&note_path("A", "n.md"), &root(), &Metadata::new(), &body);
        assert_eq!(record.preview.chars().count(), 203);
        assert!(record.preview.ends_with("..."));
        assert!(record.content.starts_with(record.preview.trim_end_matches("...")));
    }

    #[test]
    fn test_preview_counts_characters_not_bytes() {
        // 250 two-byte characters: byte-based truncation would split one
        let body = "é".repeat(250);
        let record =
            NoteRecord::build(&note_path("A", "n.md"), &root(), &Metadata::new(), &body);
        assert_eq!(record.preview.chars().count(), 203);
        assert!(record.preview.starts_with(&"é".repeat(200)));
    }

    #[test]
    fn test_collection_is_parent_directory_name() {
        let record = NoteRecord::build(
            &note_path("Sermon Notes", "week1.md"),
            &root(),
            &Metadata::new(),
            "",
        );
        assert_eq!(record.collection, "Sermon Notes");
    }

    #[test]
    fn test_root_index_detection() {
        assert!(is_root_index(&root().join("README.md"), &root()));
        assert!(!is_root_index(
            &note_path("Devotionals", "README.md"),
            &root()
        ));
        assert!(!is_root_index(&root().join("readme.md"), &root()));
    }
}
