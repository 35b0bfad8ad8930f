use std::io;
use std::path::Path;

use note_mirror::collection;
use note_mirror::index;
use note_mirror::scan;
use note_mirror::util;

pub fn run(notes_dir: &str, output: &str) -> io::Result<()> {
    let records = scan::scan(Path::new(notes_dir))?;
    let collections = collection::aggregate(&records).into_ordered();
    let document = index::assemble(records, collections);

    let output_path = Path::new(output);
    index::write(&document, output_path)?;

    println!(
        "Generated index with {} notes from {} collections",
        document.total_notes, document.total_collections
    );
    println!("Saved to: {}", util::display_path(output_path));
    Ok(())
}
