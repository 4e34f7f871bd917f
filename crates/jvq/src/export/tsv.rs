//! TSV export format implementation

use super::format::ExportFormat;
use super::table::Cell;

/// TSV (Tab-Separated Values) exporter
#[derive(Debug, Clone, Copy, Default)]
pub struct TsvExporter;

impl ExportFormat for TsvExporter {
    fn extension(&self) -> &'static str {
        "tsv"
    }

    fn header(&self, columns: &[String]) -> Option<String> {
        Some(
            columns
                .iter()
                .map(|c| escape_field(c))
                .collect::<Vec<_>>()
                .join("\t"),
        )
    }

    fn format_row(&self, _columns: &[String], row: &[Cell]) -> String {
        row.iter()
            .map(|cell| escape_field(&cell.to_string()))
            .collect::<Vec<_>>()
            .join("\t")
    }
}

/// Tabs and line breaks would split the field
fn escape_field(value: &str) -> String {
    value.replace(['\t', '\n', '\r'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::table::Table;

    #[test]
    fn test_format_table() {
        let mut table = Table::new(["ID", "名前"]);
        table.push(vec![Cell::from(1u8), Cell::from("アイ")]);
        table.push(vec![Cell::from(2u8), Cell::dash()]);
        assert_eq!(
            TsvExporter.format_table(&table),
            "ID\t名前\n1\tアイ\n2\t-\n"
        );
    }

    #[test]
    fn test_escape_field() {
        let row = [Cell::from("a\tb\nc")];
        assert_eq!(TsvExporter.format_row(&[], &row), "a b c");
    }
}
