//! CLI entry point for the selection bias meme renderer

use clap::Parser;
use selection_meme::io::cli::{Cli, MemeCommand};

fn main() -> selection_meme::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    MemeCommand::new(cli).run()
}
