//! Directory scanning: builds note records from an exported notes tree
//!
//! Traversal is sorted by file name at every level so discovery order (and
//! with it collection first-seen order) is identical across platforms.

use std::fs;
use std::io;
use std::path::Path;

use walkdir::WalkDir;

use crate::constants as C;
use crate::frontmatter;
use crate::note::{self, NoteRecord};

/// True for paths carrying the note document extension
fn is_markdown(path: &Path) -> bool {
    path.extension()
        .map(|e| e == C::MARKDOWN_EXTENSION.trim_start_matches('.'))
        .unwrap_or(false)
}

/// Scan `notes_root` recursively and build one record per markdown document
///
/// A missing root aborts the scan with `NotFound`. A document that cannot be
/// read is logged and skipped; it never aborts the rest of the scan. The
/// root-level `README.md` summary file is excluded.
pub fn scan(notes_root: &Path) -> io::Result<Vec<NoteRecord>> {
    if !notes_root.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("notes directory not found: {}", notes_root.display()),
        ));
    }
    let notes_root = dunce::canonicalize(notes_root)?;

    let mut records = Vec::new();
    for entry in WalkDir::new(&notes_root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                log::warn!("skipping unreadable entry: {}", err);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if !is_markdown(path) {
            continue;
        }
        if note::is_root_index(path, &notes_root) {
            continue;
        }

        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) => {
                log::warn!("skipping unreadable note {}: {}", path.display(), err);
                continue;
            }
        };

        let (metadata, body) = frontmatter::parse(&raw);
        records.push(NoteRecord::build(path, &notes_root, &metadata, &body));
    }

    Ok(records)
}
