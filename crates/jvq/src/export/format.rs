//! ExportFormat trait definition

use super::table::{Cell, Table};

/// Trait for export format implementations
///
/// Provides a common interface for different export formats (TSV, JSON, etc.)
pub trait ExportFormat {
    /// File extension used when writing a sheet to disk
    fn extension(&self) -> &'static str;

    /// Returns the header line for the format (empty for formats without headers)
    fn header(&self, columns: &[String]) -> Option<String>;

    /// Format a single row of a table
    fn format_row(&self, columns: &[String], row: &[Cell]) -> String;

    /// Format a whole table
    fn format_table(&self, table: &Table) -> String {
        let mut output = String::new();
        if let Some(header) = self.header(&table.columns) {
            output.push_str(&header);
            output.push('\n');
        }
        for row in &table.rows {
            output.push_str(&self.format_row(&table.columns, row));
            output.push('\n');
        }
        output
    }
}
