//! CLI command implementations.

pub mod enemy;
pub mod export;
pub mod hexdump;
pub mod verify;

use std::path::Path;

use anyhow::{Context, Result};
use jvq::{ExtractConfig, ImageBuffer, JVQ_LAYOUT, load_prg_rom};

/// Load the PRG region of `rom` with the configured checksum policy
pub fn load_image(rom: &Path, config: &ExtractConfig) -> Result<ImageBuffer> {
    load_prg_rom(rom, &JVQ_LAYOUT, config)
        .with_context(|| format!("Failed to load {}", rom.display()))
}
