//! Command line definitions

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use jvq::{OutputFormat, Sheet};

#[derive(Parser)]
#[command(name = "jvqdump")]
#[command(about = "Extract game data tables from a JVQ NES image")]
#[command(version)]
pub struct Cli {
    /// Settings file (defaults to ./jvqdump.toml when present)
    #[arg(short, long, global = true, env = "JVQDUMP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Accept images whose PRG checksum does not match
    #[arg(long, global = true)]
    pub no_verify: bool,

    /// Skip records that fail to decode instead of aborting
    #[arg(long, global = true)]
    pub lenient: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Write report sheets
    Export {
        /// iNES image
        rom: PathBuf,

        /// Sheet to export (repeatable, default all)
        #[arg(short, long = "sheet")]
        sheets: Vec<Sheet>,

        /// Output format (tsv, json)
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Directory to write one file per sheet into (stdout if omitted)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },
    /// Show everything known about one enemy
    Enemy {
        /// iNES image
        rom: PathBuf,

        /// Enemy id (decimal or 0x-prefixed hex)
        #[arg(value_parser = parse_id)]
        id: u8,

        /// Print the profile as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check the PRG size and checksum
    Verify {
        /// iNES image
        rom: PathBuf,
    },
    /// Hexdump part of the PRG region
    Hexdump {
        /// iNES image
        rom: PathBuf,

        /// PRG offset (hex, with or without 0x prefix)
        #[arg(value_parser = parse_hex_address)]
        address: usize,

        /// Number of bytes to dump
        #[arg(short, long, default_value = "256")]
        size: usize,
    },
}

/// Parse a hex address string (with or without 0x prefix).
pub fn parse_hex_address(s: &str) -> Result<usize> {
    let s = s.trim_start_matches("0x").trim_start_matches("0X");
    usize::from_str_radix(s, 16).map_err(|e| anyhow!("Invalid hex address: {}", e))
}

/// Parse a one-byte id given in decimal or 0x-prefixed hex
pub fn parse_id(s: &str) -> Result<u8> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|e| anyhow!("Invalid id {s:?}: {e}"))
}
