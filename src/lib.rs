pub mod cli;
pub mod collection;
pub mod constants;
pub mod export;
pub mod frontmatter;
pub mod index;
pub mod note;
pub mod remote;
pub mod scan;
pub mod util;

pub use cli::{Cli, Command};
pub use collection::{aggregate, Collection, CollectionTally};
pub use index::IndexDocument;
pub use note::NoteRecord;
pub use remote::{NotesApi, RemoteNote};
