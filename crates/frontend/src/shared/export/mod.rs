//! Table export: CSV, Excel workbook and PDF.
//!
//! All three encoders work on an [`ExportTable`] built from the rows currently
//! loaded in a table. The schema comes from the first row, not from the column
//! definitions, and a synthesized serial column is prepended.

mod csv;
mod download;
mod pdf;
mod xlsx;

pub use self::csv::encode_csv;
pub use download::download_bytes;
pub use pdf::encode_pdf;
pub use xlsx::encode_xlsx;

use chrono::NaiveDate;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::shared::components::data_table::state::serial_number;

pub const SERIAL_HEADER: &str = "S.No";
pub const FILE_PREFIX: &str = "table-export";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("csv encoding failed: {0}")]
    Csv(#[from] ::csv::Error),
    #[error("workbook encoding failed: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("pdf encoding failed: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Excel,
    Pdf,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Csv, ExportFormat::Excel, ExportFormat::Pdf];

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Excel => "xlsx",
            ExportFormat::Pdf => "pdf",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv;charset=utf-8;",
            ExportFormat::Excel => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
            ExportFormat::Pdf => "application/pdf",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Excel => "Excel",
            ExportFormat::Pdf => "PDF",
        }
    }

    pub fn encode(&self, table: &ExportTable) -> Result<Vec<u8>, ExportError> {
        match self {
            ExportFormat::Csv => encode_csv(table),
            ExportFormat::Excel => encode_xlsx(table),
            ExportFormat::Pdf => encode_pdf(table),
        }
    }
}

/// `table-export-<YYYY-MM-DD>.<ext>`
pub fn export_file_name(format: ExportFormat, date: NaiveDate) -> String {
    format!(
        "{}-{}.{}",
        FILE_PREFIX,
        date.format("%Y-%m-%d"),
        format.extension()
    )
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExportCell {
    Empty,
    Text(String),
    Number(String),
    Bool(bool),
}

impl ExportCell {
    pub fn from_value(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => ExportCell::Empty,
            Some(Value::String(s)) => ExportCell::Text(s.clone()),
            Some(Value::Number(n)) => ExportCell::Number(n.to_string()),
            Some(Value::Bool(b)) => ExportCell::Bool(*b),
            Some(other) => ExportCell::Text(other.to_string()),
        }
    }

    pub fn display(&self) -> String {
        match self {
            ExportCell::Empty => String::new(),
            ExportCell::Text(s) | ExportCell::Number(s) => s.clone(),
            ExportCell::Bool(b) => b.to_string(),
        }
    }
}

/// Headers plus cell grid, serial column first
#[derive(Debug, Clone, PartialEq)]
pub struct ExportTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<ExportCell>>,
}

impl ExportTable {
    /// `None` when there is nothing to export.
    pub fn from_rows(
        rows: &[Map<String, Value>],
        page_index: usize,
        page_size: usize,
    ) -> Option<Self> {
        let first = rows.first()?;
        let keys: Vec<&String> = first.keys().collect();

        let mut headers = Vec::with_capacity(keys.len() + 1);
        headers.push(SERIAL_HEADER.to_string());
        headers.extend(keys.iter().map(|k| k.to_string()));

        let rows = rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let serial = serial_number(page_index, page_size, i);
                let mut cells = Vec::with_capacity(keys.len() + 1);
                cells.push(ExportCell::Number(serial.to_string()));
                cells.extend(keys.iter().map(|k| ExportCell::from_value(row.get(*k))));
                cells
            })
            .collect();

        Some(Self { headers, rows })
    }

    /// Serializes arbitrary rows first. A row that is not a JSON object keeps
    /// its slot (and serial) with empty cells.
    pub fn from_serializable<T: serde::Serialize>(
        rows: &[T],
        page_index: usize,
        page_size: usize,
    ) -> Option<Self> {
        let maps: Vec<Map<String, Value>> = rows
            .iter()
            .map(|row| match serde_json::to_value(row) {
                Ok(Value::Object(map)) => map,
                Ok(_) => Map::new(),
                Err(e) => {
                    log::warn!("export: row left empty, serialization failed: {}", e);
                    Map::new()
                }
            })
            .collect();
        Self::from_rows(&maps, page_index, page_size)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use serde_json::json;

    pub(crate) fn sample_rows() -> Vec<Map<String, Value>> {
        let rows = vec![
            json!({"name": "Shoes, red", "price": 49.5, "active": true, "note": null}),
            json!({"price": 10, "name": "Cap \"classic\"", "extra": "ignored"}),
        ];
        rows.into_iter()
            .map(|v| match v {
                Value::Object(map) => map,
                _ => unreachable!(),
            })
            .collect()
    }

    #[test]
    fn test_schema_from_first_row() {
        let table = ExportTable::from_rows(&sample_rows(), 0, 10).unwrap();
        assert_eq!(table.headers, vec!["S.No", "name", "price", "active", "note"]);
        // second row: missing keys become empty, unknown keys are dropped
        assert_eq!(
            table.rows[1],
            vec![
                ExportCell::Number("2".to_string()),
                ExportCell::Text("Cap \"classic\"".to_string()),
                ExportCell::Number("10".to_string()),
                ExportCell::Empty,
                ExportCell::Empty,
            ]
        );
    }

    #[test]
    fn test_serials_are_page_relative() {
        let table = ExportTable::from_rows(&sample_rows(), 2, 10).unwrap();
        assert_eq!(table.rows[0][0], ExportCell::Number("21".to_string()));
        assert_eq!(table.rows[1][0], ExportCell::Number("22".to_string()));
    }

    #[test]
    fn test_non_object_row_keeps_its_serial() {
        let rows = vec![
            json!({"name": "Shoes"}),
            Value::Null,
            json!({"name": "Cap"}),
        ];
        let table = ExportTable::from_serializable(&rows, 2, 10).unwrap();
        let serials: Vec<String> = table.rows.iter().map(|r| r[0].display()).collect();
        assert_eq!(serials, vec!["21", "22", "23"]);
        assert_eq!(table.rows[1][1], ExportCell::Empty);
        assert_eq!(table.rows[2][1].display(), "Cap");
    }

    #[test]
    fn test_empty_rows_export_nothing() {
        assert!(ExportTable::from_rows(&[], 0, 10).is_none());
        let none: Vec<serde_json::Value> = Vec::new();
        assert!(ExportTable::from_serializable(&none, 0, 10).is_none());
    }

    #[test]
    fn test_file_name() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(
            export_file_name(ExportFormat::Excel, date),
            "table-export-2024-03-15.xlsx"
        );
        assert_eq!(
            export_file_name(ExportFormat::Csv, date),
            "table-export-2024-03-15.csv"
        );
    }
}
