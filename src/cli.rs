use clap::{Parser, Subcommand};

use crate::constants as C;

/// note-mirror - Export remote notes to markdown and index them
///
/// # Quick Reference
///
/// ## Export
///
/// ```bash
/// note-mirror export --token <JWT> --app-key <KEY>
/// note-mirror export --output my_notes     # Custom export directory
///
/// # Credentials from the environment:
/// NOTE_MIRROR_TOKEN=... NOTE_MIRROR_APP_KEY=... note-mirror export
/// ```
///
/// ## Index
///
/// ```bash
/// note-mirror index                        # subsplash_notes -> viewer/notes_index.json
/// note-mirror index --notes-dir my_notes
/// note-mirror index --output site/index.json
/// ```
///
/// ## Typical Workflow
///
/// ```bash
/// note-mirror export --token <JWT> --app-key <KEY>
/// note-mirror index
/// ```
///
/// ## Getting Credentials
///
/// 1. Open the note service in your browser while logged in
/// 2. Open DevTools (F12) and go to the Network tab
/// 3. Refresh and find a request to 'pages/list'
/// 4. Copy the token after 'Bearer ' from the authorization header
/// 5. Copy the 'appKey' query parameter from the same request
///
/// ## Environment Variables
///
/// - `NOTE_MIRROR_TOKEN`: Bearer token (fallback for --token)
/// - `NOTE_MIRROR_APP_KEY`: Application key (fallback for --app-key)
///
#[derive(Parser, Debug)]
#[command(name = "note-mirror")]
#[command(version = "0.1.0")]
#[command(about = "Export notes from a remote note service and build a searchable JSON index")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch all notes from the remote service into markdown files
    Export {
        /// Pages-list endpoint to fetch from
        #[arg(long, value_name = "URL", default_value = C::DEFAULT_API_URL)]
        api_url: String,

        /// Bearer token (falls back to $NOTE_MIRROR_TOKEN)
        #[arg(long, value_name = "JWT")]
        token: Option<String>,

        /// Application key sent as the appKey query parameter (falls back to $NOTE_MIRROR_APP_KEY)
        #[arg(long, value_name = "KEY")]
        app_key: Option<String>,

        /// Directory to export notes into
        #[arg(short, long, value_name = "DIR", default_value = C::DEFAULT_NOTES_DIR)]
        output: String,
    },

    /// Build the JSON index from exported markdown files
    Index {
        /// Directory holding the exported notes
        #[arg(long, value_name = "DIR", default_value = C::DEFAULT_NOTES_DIR)]
        notes_dir: String,

        /// Path of the index file to write
        #[arg(short, long, value_name = "FILE", default_value = C::DEFAULT_INDEX_FILE)]
        output: String,
    },
}
