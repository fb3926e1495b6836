use crate::bundle_dismantling::domain::Table;
use crate::ports::outbound::TableReader;
use crate::shared::error::DismantleError;
use crate::shared::security::check_input_file;
use crate::shared::Result;
use calamine::{open_workbook_auto, DataType, Range, Reader};
use std::path::Path;

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Spreadsheet families the reader understands, detected from the extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TableFormat {
    Csv,
    Workbook,
}

impl TableFormat {
    fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "csv" => Ok(Self::Csv),
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Ok(Self::Workbook),
            _ => Err(DismantleError::UnsupportedFormat {
                path: path.to_path_buf(),
                details: "Expected a .csv, .xlsx, .xlsm, .xlsb, .xls or .ods file".to_string(),
            }
            .into()),
        }
    }
}

/// FileSystemTableReader adapter for reading order and master tables
///
/// CSV files are read with the `csv` crate and expose a single sheet named
/// after the file stem. Workbooks are read with `calamine`; when no sheet is
/// requested the first one is used.
pub struct FileSystemTableReader;

impl FileSystemTableReader {
    pub fn new() -> Self {
        Self
    }

    fn csv_sheet_name(path: &Path) -> String {
        path.file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    fn read_csv(&self, path: &Path, sheet: Option<&str>) -> Result<Table> {
        let sheet_name = Self::csv_sheet_name(path);
        if let Some(requested) = sheet {
            if requested != sheet_name {
                return Err(DismantleError::SheetNotFound {
                    path: path.to_path_buf(),
                    sheet: requested.to_string(),
                    available: sheet_name,
                }
                .into());
            }
        }

        let read_error = |e: csv::Error| DismantleError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path)
            .map_err(read_error)?;

        let mut records = reader.records();
        let headers: Vec<String> = match records.next() {
            Some(record) => record
                .map_err(read_error)?
                .iter()
                .map(|h| h.trim_start_matches('\u{feff}').to_string())
                .collect(),
            None => Vec::new(),
        };

        let mut rows = Vec::new();
        for record in records {
            let record = record.map_err(read_error)?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Table::new(headers, rows))
    }

    fn read_workbook(&self, path: &Path, sheet: Option<&str>) -> Result<Table> {
        let mut workbook = open_workbook_auto(path).map_err(|e| DismantleError::FileReadError {
            path: path.to_path_buf(),
            details: format!("Failed to open workbook: {}", e),
        })?;

        let sheet_names = workbook.sheet_names().to_vec();
        let sheet_name = match sheet {
            Some(requested) => sheet_names
                .iter()
                .find(|name| name.as_str() == requested)
                .cloned(),
            None => sheet_names.first().cloned(),
        }
        .ok_or_else(|| DismantleError::SheetNotFound {
            path: path.to_path_buf(),
            sheet: sheet.unwrap_or("<first sheet>").to_string(),
            available: if sheet_names.is_empty() {
                "(none)".to_string()
            } else {
                sheet_names.join(", ")
            },
        })?;

        let range = workbook
            .worksheet_range(&sheet_name)
            .ok_or_else(|| DismantleError::SheetNotFound {
                path: path.to_path_buf(),
                sheet: sheet_name.clone(),
                available: sheet_names.join(", "),
            })?
            .map_err(|e| DismantleError::FileReadError {
                path: path.to_path_buf(),
                details: format!("Failed to read sheet '{}': {}", sheet_name, e),
            })?;

        Ok(range_to_table(&range))
    }
}

impl Default for FileSystemTableReader {
    fn default() -> Self {
        Self::new()
    }
}

impl TableReader for FileSystemTableReader {
    fn sheet_names(&self, path: &Path) -> Result<Vec<String>> {
        check_input_file(path)?;

        match TableFormat::from_path(path)? {
            TableFormat::Csv => Ok(vec![Self::csv_sheet_name(path)]),
            TableFormat::Workbook => {
                let workbook =
                    open_workbook_auto(path).map_err(|e| DismantleError::FileReadError {
                        path: path.to_path_buf(),
                        details: format!("Failed to open workbook: {}", e),
                    })?;
                Ok(workbook.sheet_names().to_vec())
            }
        }
    }

    fn read_table(&self, path: &Path, sheet: Option<&str>) -> Result<Table> {
        check_input_file(path)?;

        match TableFormat::from_path(path)? {
            TableFormat::Csv => self.read_csv(path, sheet),
            TableFormat::Workbook => self.read_workbook(path, sheet),
        }
    }
}

/// First row of the used range becomes the header row.
///
/// The used range starts at the first non-empty cell, so its start row is
/// kept to report sheet row numbers.
fn range_to_table(range: &Range<DataType>) -> Table {
    let header_offset = range.start().map(|(row, _)| row as usize).unwrap_or(0);
    let mut rows = range
        .rows()
        .map(|row| row.iter().map(cell_text).collect::<Vec<String>>());

    let headers = rows.next().unwrap_or_default();
    Table::new(headers, rows.collect()).with_header_offset(header_offset)
}

/// Renders a workbook cell the way it reads in the spreadsheet
fn cell_text(cell: &DataType) -> String {
    match cell {
        DataType::Empty => String::new(),
        DataType::String(s) => s.clone(),
        DataType::Int(i) => i.to_string(),
        // Integral floats print without a fractional part ("2", not "2.0")
        DataType::Float(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 => {
            format!("{}", *f as i64)
        }
        DataType::Float(f) => f.to_string(),
        DataType::DateTime(_) => cell
            .as_datetime()
            .map(|dt| dt.format(DATETIME_FORMAT).to_string())
            .unwrap_or_else(|| cell.to_string()),
        other => other.to_string(),
    }
}
