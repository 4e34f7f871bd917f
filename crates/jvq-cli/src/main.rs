mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};
use config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let default_filter = if cli.verbose {
        "jvq=debug,jvqdump=debug"
    } else {
        "jvq=info,jvqdump=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load(cli.config.as_deref())?;
    let extract = config.extract_config(cli.no_verify, cli.lenient);

    match cli.command {
        Command::Export {
            rom,
            sheets,
            format,
            output_dir,
        } => commands::export::run(
            &rom,
            &sheets,
            format.unwrap_or(config.export.format),
            output_dir.or(config.export.output_dir).as_deref(),
            &extract,
        ),
        Command::Enemy { rom, id, json } => commands::enemy::run(&rom, id, json, &extract),
        Command::Verify { rom } => commands::verify::run(&rom),
        Command::Hexdump { rom, address, size } => {
            commands::hexdump::run(&rom, address, size, &extract)
        }
    }
}
