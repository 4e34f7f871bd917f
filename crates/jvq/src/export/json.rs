//! JSON export format implementation

use serde_json::{Map, Value as JsonValue, json};

use super::format::ExportFormat;
use super::table::Cell;

/// JSON exporter (one object per line, NDJSON format)
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExporter;

impl ExportFormat for JsonExporter {
    fn extension(&self) -> &'static str {
        "ndjson"
    }

    fn header(&self, _columns: &[String]) -> Option<String> {
        None // JSON doesn't need a header
    }

    fn format_row(&self, columns: &[String], row: &[Cell]) -> String {
        format_json_entry(columns, row).to_string()
    }
}

/// Object keyed by column caption, in column order
pub fn format_json_entry(columns: &[String], row: &[Cell]) -> JsonValue {
    let entry: Map<String, JsonValue> = columns
        .iter()
        .zip(row)
        .map(|(column, cell)| {
            let value = match cell {
                Cell::Int(value) => json!(value),
                Cell::Text(value) => json!(value),
            };
            (column.clone(), value)
        })
        .collect();
    JsonValue::Object(entry)
}
