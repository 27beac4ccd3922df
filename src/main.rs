//! CLI entry point for the procedural dungeon generator

use clap::Parser;
use dungeon_forge::io::cli::{Cli, DungeonProcessor};

fn main() -> dungeon_forge::Result<()> {
    let cli = Cli::parse();

    let level = if cli.quiet {
        log::LevelFilter::Warn
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let mut processor = DungeonProcessor::new(cli);
    processor.process().map(|_| ())
}
