use clap::Parser;
use note_mirror::{Cli, Command};

fn main() -> std::io::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Export {
            api_url,
            token,
            app_key,
            output,
        } => cmd::export::run(&api_url, token.as_deref(), app_key.as_deref(), &output),
        Command::Index { notes_dir, output } => cmd::index::run(&notes_dir, &output),
    }
}

mod cmd {
    pub mod export;
    pub mod index;
}
