//! Export writer
//!
//! Serializes fetched remote notes back into the frontmatter document
//! format the indexer consumes, one file per note under a folder per
//! collection, plus a root README.md summarizing the export. This module
//! defines the on-disk contract [`crate::frontmatter`] round-trips.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::io;
use std::path::Path;

use chrono::Local;

use crate::constants as C;
use crate::remote::RemoteNote;
use crate::util;

/// One file written during export
#[derive(Debug)]
pub struct ExportedNote {
    pub title: String,
    pub filename: String,
}

/// One collection folder written during export
#[derive(Debug)]
pub struct ExportedCollection {
    pub name: String,
    pub folder: String,
    pub notes: Vec<ExportedNote>,
}

/// Record of a finished export, in write order
#[derive(Debug)]
pub struct ExportSummary {
    pub collections: Vec<ExportedCollection>,
}

impl ExportSummary {
    pub fn total_notes(&self) -> usize {
        self.collections.iter().map(|c| c.notes.len()).sum()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn collection_title(note: &RemoteNote) -> &str {
    note.collection
        .as_ref()
        .and_then(|c| c.title.as_deref())
        .filter(|t| !t.is_empty())
        .unwrap_or(C::DEFAULT_COLLECTION_NAME)
}

/// Group notes by collection title, keeping first-seen collection order
pub fn group_by_collection(notes: Vec<RemoteNote>) -> Vec<(String, Vec<RemoteNote>)> {
    let mut groups: Vec<(String, Vec<RemoteNote>)> = Vec::new();
    for note in notes {
        let name = collection_title(&note).to_string();
        match groups.iter_mut().find(|g| g.0 == name) {
            Some(group) => group.1.push(note),
            None => groups.push((name, vec![note])),
        }
    }
    groups
}

/// Render a remote note as a frontmatter-annotated markdown document
///
/// Line order matches what the parser expects back: `title` first,
/// optional descriptive lines next, then the bookkeeping lines which are
/// always present even when the service sent nothing for them.
pub fn note_markdown(note: &RemoteNote, collection_name: &str) -> String {
    let title = note.title.as_deref().unwrap_or(C::UNTITLED_NOTE_TITLE);

    let mut lines = vec![
        C::FRONTMATTER_MARKER.to_string(),
        format!("title: {}", title),
    ];
    if let Some(subtitle) = non_empty(&note.subtitle) {
        lines.push(format!("subtitle: {}", subtitle));
    }
    if let Some(author) = non_empty(&note.author) {
        lines.push(format!("author: {}", author));
    }
    if let Some(publish) = non_empty(&note.publish) {
        lines.push(format!("date: {}", publish));
    }
    if note.collection.is_some() {
        lines.push(format!("collection: {}", collection_name));
    }
    if let Some(color) = non_empty(&note.color) {
        lines.push(format!("color: {}", color));
    }
    lines.push(format!("created: {}", note.created.as_deref().unwrap_or("")));
    lines.push(format!("updated: {}", note.updated.as_deref().unwrap_or("")));
    lines.push(format!("note_id: {}", note.id.as_deref().unwrap_or("")));
    lines.push(format!("hid: {}", note.hid.as_deref().unwrap_or("")));
    lines.push(C::FRONTMATTER_MARKER.to_string());
    lines.push(String::new());
    lines.push(note.content.clone().unwrap_or_default());
    lines.join("\n")
}

/// Derive the on-disk filename for a note from its title and subtitle
pub fn note_filename(note: &RemoteNote) -> String {
    let title = note.title.as_deref().unwrap_or(C::UNTITLED_NOTE_TITLE);
    let raw = match non_empty(&note.subtitle) {
        Some(subtitle) => format!("{} - {}{}", title, subtitle, C::MARKDOWN_EXTENSION),
        None => format!("{}{}", title, C::MARKDOWN_EXTENSION),
    };
    util::sanitize_filename(&raw)
}

/// Pick a filename not already taken within the collection folder
///
/// A first collision gets an abbreviated content-hash suffix, so notes
/// that share a title but differ in content stay distinguishable. If the
/// hash also collides (identical content), a counter is appended.
fn disambiguate(filename: &str, note: &RemoteNote, used: &HashSet<String>) -> String {
    if !used.contains(filename) {
        return filename.to_string();
    }
    let (stem, ext) = match filename.strip_suffix(C::MARKDOWN_EXTENSION) {
        Some(stem) => (stem, C::MARKDOWN_EXTENSION),
        None => (filename, ""),
    };
    let hash = util::short_content_hash(note.content.as_deref().unwrap_or(""));
    let hashed = format!("{}-{}{}", stem, hash, ext);
    if !used.contains(&hashed) {
        return hashed;
    }
    let mut counter = 2;
    loop {
        let candidate = format!("{}-{}-{}{}", stem, hash, counter, ext);
        if !used.contains(&candidate) {
            return candidate;
        }
        counter += 1;
    }
}

/// Write every note under `output_dir`, one folder per collection, then
/// a README.md index of everything written
pub fn write_export(notes: Vec<RemoteNote>, output_dir: &Path) -> io::Result<ExportSummary> {
    fs::create_dir_all(output_dir)?;

    let mut collections = Vec::new();
    let mut used_by_folder: HashMap<String, HashSet<String>> = HashMap::new();
    for (name, members) in group_by_collection(notes) {
        let folder = util::sanitize_filename(&name);
        let folder_path = output_dir.join(&folder);
        fs::create_dir_all(&folder_path)?;

        // Distinct collection titles can sanitize to the same folder, so
        // taken filenames are tracked per folder, not per collection.
        let used = used_by_folder.entry(folder.clone()).or_default();
        let mut exported = Vec::new();
        for note in &members {
            let filename = disambiguate(&note_filename(note), note, used);
            fs::write(folder_path.join(&filename), note_markdown(note, &name))?;
            used.insert(filename.clone());
            exported.push(ExportedNote {
                title: note
                    .title
                    .clone()
                    .unwrap_or_else(|| C::UNTITLED_NOTE_TITLE.to_string()),
                filename,
            });
        }
        collections.push(ExportedCollection {
            name,
            folder,
            notes: exported,
        });
    }

    let summary = ExportSummary { collections };
    write_readme(&summary, output_dir)?;
    Ok(summary)
}

fn write_readme(summary: &ExportSummary, output_dir: &Path) -> io::Result<()> {
    let mut readme = String::from("# Notes Export\n\n");
    readme.push_str(&format!(
        "Exported on: {}\n",
        Local::now().format(C::EXPORT_TIMESTAMP_FORMAT)
    ));
    readme.push_str(&format!("Total notes: {}\n\n", summary.total_notes()));
    readme.push_str("## Collections\n\n");
    for collection in &summary.collections {
        readme.push_str(&format!(
            "### {} ({} notes)\n\n",
            collection.name,
            collection.notes.len()
        ));
        for note in &collection.notes {
            readme.push_str(&format!(
                "- [{}]({}/{})\n",
                note.title, collection.folder, note.filename
            ));
        }
        readme.push('\n');
    }
    fs::write(output_dir.join(C::ROOT_INDEX_FILENAME), readme)
}
