//! Report rendering
//!
//! Each [`Sheet`] is first laid out as a [`Table`] and then rendered by an
//! [`ExportFormat`].

mod format;
mod json;
mod sheet;
mod table;
mod tsv;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};
use tracing::info;

pub use format::ExportFormat;
pub use json::{JsonExporter, format_json_entry};
pub use sheet::*;
pub use table::{Cell, Table};
pub use tsv::TsvExporter;

use crate::data::GameData;
use crate::error::Result;

/// Output format selectable by name
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    EnumString,
    IntoStaticStr,
    Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Tsv,
    Json,
}

impl OutputFormat {
    pub fn exporter(&self) -> Box<dyn ExportFormat> {
        match self {
            Self::Tsv => Box::new(TsvExporter),
            Self::Json => Box::new(JsonExporter),
        }
    }
}

/// Render one sheet to a string
pub fn render_sheet(data: &GameData, sheet: Sheet, format: &dyn ExportFormat) -> String {
    format.format_table(&sheet.table(data))
}

/// Write one sheet as `<dir>/<sheet>.<ext>` and return the path written
pub fn write_sheet(
    dir: &Path,
    data: &GameData,
    sheet: Sheet,
    format: &dyn ExportFormat,
) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("{sheet}.{}", format.extension()));
    let table = sheet.table(data);
    fs::write(&path, format.format_table(&table))?;
    info!("Wrote {} rows of {} to {}", table.len(), sheet, path.display());
    Ok(path)
}
