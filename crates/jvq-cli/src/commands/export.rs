//! Export command for writing report sheets.

use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use jvq::{
    EntityBuilder, ExtractConfig, GameData, JVQ_LAYOUT, OutputFormat, Sheet, render_sheet,
    write_sheet,
};
use strum::IntoEnumIterator;
use tracing::{info, warn};

use super::load_image;

/// Extract every table and export the requested sheets
pub fn run(
    rom: &Path,
    sheets: &[Sheet],
    format: OutputFormat,
    output_dir: Option<&Path>,
    config: &ExtractConfig,
) -> Result<()> {
    let image = load_image(rom, config)?;
    let data = EntityBuilder::new(&image, &JVQ_LAYOUT, config.clone())
        .extract_all()
        .context("Extraction failed")?;
    report_failures(&data);

    let sheets: Vec<Sheet> = if sheets.is_empty() {
        Sheet::iter().collect()
    } else {
        sheets.to_vec()
    };
    export_sheets(&data, &sheets, format, output_dir)
}

fn report_failures(data: &GameData) {
    if data.is_complete() {
        return;
    }
    warn!("{} records were skipped", data.failures.len());
    for failure in &data.failures {
        warn!("  {} {}: {}", failure.kind, failure.id, failure.message);
    }
}

pub fn export_sheets(
    data: &GameData,
    sheets: &[Sheet],
    format: OutputFormat,
    output_dir: Option<&Path>,
) -> Result<()> {
    let exporter = format.exporter();
    match output_dir {
        Some(dir) => {
            for &sheet in sheets {
                write_sheet(dir, data, sheet, exporter.as_ref())
                    .with_context(|| format!("Failed to write {} to {}", sheet, dir.display()))?;
            }
            info!("Exported {} sheets to {}", sheets.len(), dir.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            for &sheet in sheets {
                eprintln!("# {} ({})", sheet.title(), sheet);
                stdout.write_all(render_sheet(data, sheet, exporter.as_ref()).as_bytes())?;
            }
            stdout.flush()?;
        }
    }
    Ok(())
}
