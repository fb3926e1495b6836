use crate::bundle_dismantling::domain::Table;
use crate::shared::Result;
use std::path::Path;

/// TableReader port for loading order and master tables
///
/// This port abstracts spreadsheet and CSV parsing so that the use case
/// only ever sees already-parsed `Table`s.
pub trait TableReader {
    /// Lists the sheet names of a file, in workbook order
    ///
    /// # Arguments
    /// * `path` - Path to a spreadsheet or CSV file
    ///
    /// # Errors
    /// Returns an error if the file does not exist, is not a supported
    /// format, or cannot be opened
    fn sheet_names(&self, path: &Path) -> Result<Vec<String>>;

    /// Reads one sheet as a table; the first row is the header
    ///
    /// # Arguments
    /// * `path` - Path to a spreadsheet or CSV file
    /// * `sheet` - Sheet to read; `None` selects the first sheet
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file cannot be read or parsed
    /// - The requested sheet does not exist
    fn read_table(&self, path: &Path, sheet: Option<&str>) -> Result<Table>;
}
