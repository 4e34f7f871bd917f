//! Verify command: PRG size and checksum against the supported revision.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use jvq::{ChecksumReport, JVQ_LAYOUT, read_prg_rom};
use owo_colors::OwoColorize;

pub fn run(rom: &Path) -> Result<()> {
    let bytes = fs::read(rom).with_context(|| format!("Failed to read {}", rom.display()))?;
    let image = read_prg_rom(&bytes).with_context(|| format!("Invalid image {}", rom.display()))?;
    let report = ChecksumReport::new(&image, &JVQ_LAYOUT);

    println!("{}", rom.display());
    println!("  PRG size: {:#x} bytes", report.size);
    println!("  CRC-32:   {:08X} (expected {:08X})", report.actual, report.expected);
    if report.matches() {
        println!("  {}", "OK".green().bold());
        Ok(())
    } else {
        println!("  {}", "MISMATCH".red().bold());
        bail!("{} is not the supported revision", rom.display())
    }
}
