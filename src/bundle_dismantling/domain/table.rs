use crate::shared::error::DismantleError;

/// An already-parsed sheet: a header row followed by rows of cell text.
///
/// Rows may be shorter than the header; missing cells read as blank.
/// `header_offset` counts the sheet rows above the header, which workbook
/// readers skip when a sheet starts with blank rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    header_offset: usize,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            headers,
            rows,
            header_offset: 0,
        }
    }

    /// Places the header `offset` rows below the top of the sheet
    pub fn with_header_offset(mut self, offset: usize) -> Self {
        self.header_offset = offset;
        self
    }

    /// Convenience constructor for fixed-content tables
    pub fn from_strs(headers: &[&str], rows: &[&[&str]]) -> Self {
        Self::new(
            headers.iter().map(|h| h.to_string()).collect(),
            rows.iter()
                .map(|row| row.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Data rows that contain at least one non-blank cell, paired with their
    /// 1-based sheet row number (the header is row `header_offset + 1`).
    pub fn records(&self) -> impl Iterator<Item = (usize, &[String])> {
        let first_data_row = self.header_offset + 2;
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.iter().any(|cell| !cell.trim().is_empty()))
            .map(move |(index, row)| (index + first_data_row, row.as_slice()))
    }

    pub fn record_count(&self) -> usize {
        self.records().count()
    }

    /// True when the table has no non-blank data rows
    pub fn is_empty(&self) -> bool {
        self.records().next().is_none()
    }

    /// Position of the first header matching `name` (see `normalize_header`)
    pub fn column_index(&self, name: &str) -> Option<usize> {
        let wanted = normalize_header(name);
        self.headers
            .iter()
            .position(|header| normalize_header(header) == wanted)
    }

    /// Resolves every required column, in the order given.
    ///
    /// # Errors
    /// `Validation` naming all missing columns of the `table_name` table
    pub fn locate_columns(
        &self,
        table_name: &str,
        required: &[&str],
    ) -> Result<Vec<usize>, DismantleError> {
        let mut indices = Vec::with_capacity(required.len());
        let mut missing = Vec::new();

        for column in required {
            match self.column_index(column) {
                Some(index) => indices.push(index),
                None => missing.push(*column),
            }
        }

        if !missing.is_empty() {
            return Err(DismantleError::validation(format!(
                "{} table is missing required column(s): {}",
                table_name,
                missing.join(", ")
            )));
        }

        Ok(indices)
    }
}

/// Cell text at `index`, blank when the row is short
pub fn cell(row: &[String], index: usize) -> &str {
    row.get(index).map(String::as_str).unwrap_or("")
}

/// Header key used for column matching: lowercase with spaces, underscores
/// and hyphens removed, so "Payment Time" matches "PaymentTime".
pub fn normalize_header(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}
