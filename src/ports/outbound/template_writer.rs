use crate::bundle_dismantling::domain::Table;
use crate::shared::Result;
use std::path::PathBuf;

/// TemplateWriter port for storing starter tables
///
/// Templates are addressed by file name; the adapter decides where they
/// live and how a table is encoded.
pub trait TemplateWriter {
    /// Location a template with this file name would be written to
    fn target(&self, file_name: &str) -> PathBuf;

    /// True if a file already occupies the template's location
    fn exists(&self, file_name: &str) -> bool;

    /// Writes the table and returns where it landed
    ///
    /// # Errors
    /// Returns an error if the table cannot be encoded or written
    fn write(&self, file_name: &str, table: &Table) -> Result<PathBuf>;

    /// Removes a template written earlier in the same run
    ///
    /// # Errors
    /// Returns an error if the file cannot be removed
    fn remove(&self, file_name: &str) -> Result<()>;
}
