//! Index assembly and serialization
//!
//! The index document is the single JSON artifact the static viewer reads.
//! Serialization is deterministic, with fixed field order and 2-space
//! indentation, and non-ASCII characters are preserved literally so the
//! output stays diffable.

use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;

use crate::collection::Collection;
use crate::note::NoteRecord;

/// Top-level index artifact
#[derive(Debug, Serialize)]
pub struct IndexDocument {
    pub total_notes: usize,
    pub total_collections: usize,
    /// First-seen order
    pub collections: Vec<Collection>,
    /// Date descending, empty dates last
    pub notes: Vec<NoteRecord>,
}

/// Assemble the index from discovery-ordered records and collections
///
/// Notes sort by `date` descending using plain string comparison (not
/// calendar-aware), which puts empty dates last; ties order by ascending
/// `file_path` so the result is identical across platforms.
pub fn assemble(mut notes: Vec<NoteRecord>, collections: Vec<Collection>) -> IndexDocument {
    notes.sort_by(|a, b| {
        b.date
            .cmp(&a.date)
            .then_with(|| a.file_path.cmp(&b.file_path))
    });

    IndexDocument {
        total_notes: notes.len(),
        total_collections: collections.len(),
        collections,
        notes,
    }
}

/// Serialize the index as pretty-printed JSON
pub fn serialize(index: &IndexDocument) -> io::Result<String> {
    serde_json::to_string_pretty(index).map_err(io::Error::from)
}

/// Write the index file, creating parent directories as needed
///
/// An existing file at `path` is overwritten unconditionally.
pub fn write(index: &IndexDocument, path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, serialize(index)?)
}
