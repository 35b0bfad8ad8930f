//! Constants for note-mirror
//!
//! Fixed names, format strings, and limits shared by the export and
//! index pipelines.

// === Document Format ===

/// Marker delimiting the frontmatter metadata block
pub const FRONTMATTER_MARKER: &str = "---";

/// File extension for note documents
pub const MARKDOWN_EXTENSION: &str = ".md";

/// Root-level export summary file, excluded from indexing
pub const ROOT_INDEX_FILENAME: &str = "README.md";

// === Note Record Defaults ===

/// Fallback accent color for notes without a `color` metadata entry
pub const DEFAULT_NOTE_COLOR: &str = "#5B4336";

/// Maximum preview length in characters (not bytes)
pub const PREVIEW_MAX_CHARS: usize = 200;

/// Appended to previews of truncated bodies
pub const PREVIEW_ELLIPSIS: &str = "...";

/// Title used for remote notes that carry none
pub const UNTITLED_NOTE_TITLE: &str = "Untitled";

// === Export ===

/// Collection for remote notes not assigned to any collection
pub const DEFAULT_COLLECTION_NAME: &str = "Uncategorized";

/// Maximum sanitized filename length in characters
pub const MAX_FILENAME_LENGTH: usize = 200;

/// Pages-list endpoint the exporter reads from by default
pub const DEFAULT_API_URL: &str = "https://notes.subsplash.com/fill-in/api/pages/list";

/// Timestamp format for the export summary: %Y-%m-%d %H:%M:%S
pub const EXPORT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// === Default Paths ===

/// Default directory notes are exported to and indexed from
pub const DEFAULT_NOTES_DIR: &str = "subsplash_notes";

/// Default path of the generated index file
pub const DEFAULT_INDEX_FILE: &str = "viewer/notes_index.json";

// === Environment Variables ===

/// Bearer token for the pages-list endpoint
pub const ENV_API_TOKEN: &str = "NOTE_MIRROR_TOKEN";

/// Application key sent as the `appKey` query parameter
pub const ENV_APP_KEY: &str = "NOTE_MIRROR_APP_KEY";

// === Hashing ===

/// Length of the abbreviated content hash used to disambiguate filenames
pub const HASH_ABBREVIATION_LENGTH: usize = 12;
