use std::io;
use std::path::Path;

use note_mirror::constants as C;
use note_mirror::export;
use note_mirror::remote::NotesApi;

/// Resolve a credential from its CLI flag, falling back to the environment
fn resolve_credential(flag: Option<&str>, env_var: &str, what: &str) -> io::Result<String> {
    if let Some(value) = flag.filter(|v| !v.is_empty()) {
        return Ok(value.to_string());
    }
    match std::env::var(env_var) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("missing {}: pass the flag or set {}", what, env_var),
        )),
    }
}

pub fn run(
    api_url: &str,
    token: Option<&str>,
    app_key: Option<&str>,
    output: &str,
) -> io::Result<()> {
    let token = resolve_credential(token, C::ENV_API_TOKEN, "bearer token")?;
    // Accept tokens pasted with the scheme prefix still attached
    let token = token
        .strip_prefix("Bearer ")
        .map(|t| t.to_string())
        .unwrap_or(token);
    let app_key = resolve_credential(app_key, C::ENV_APP_KEY, "app key")?;

    println!("Fetching notes from {}...", api_url);
    let api = NotesApi::new(api_url, &token, &app_key);
    let notes = api.fetch_pages()?;
    println!("Found {} notes to export\n", notes.len());

    let summary = export::write_export(notes, Path::new(output))?;

    for collection in &summary.collections {
        println!(
            "Collection: {} ({} notes)",
            collection.name,
            collection.notes.len()
        );
        for note in &collection.notes {
            println!("  + {}", note.filename);
        }
    }

    println!("\nExported {} notes to '{}'", summary.total_notes(), output);
    println!("Notes are organized by collection in subfolders");
    println!("See README.md for an index of all notes");
    Ok(())
}
