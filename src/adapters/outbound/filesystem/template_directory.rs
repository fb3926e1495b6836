use super::FileSystemWriter;
use crate::adapters::outbound::formatters::CsvFormatter;
use crate::bundle_dismantling::domain::Table;
use crate::ports::outbound::{OutputPresenter, TemplateWriter};
use crate::shared::error::DismantleError;
use crate::shared::Result;
use std::fs;
use std::path::PathBuf;

/// CsvTemplateDirectory adapter writing templates as CSV files in a directory
pub struct CsvTemplateDirectory {
    directory: PathBuf,
    formatter: CsvFormatter,
}

impl CsvTemplateDirectory {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            formatter: CsvFormatter::new(),
        }
    }
}

impl TemplateWriter for CsvTemplateDirectory {
    fn target(&self, file_name: &str) -> PathBuf {
        self.directory.join(file_name)
    }

    fn exists(&self, file_name: &str) -> bool {
        // A dangling symlink still occupies the name
        fs::symlink_metadata(self.target(file_name)).is_ok()
    }

    fn write(&self, file_name: &str, table: &Table) -> Result<PathBuf> {
        let path = self.target(file_name);
        let content = self.formatter.format_table(table)?;
        FileSystemWriter::new(path.clone()).present(&content)?;
        Ok(path)
    }

    fn remove(&self, file_name: &str) -> Result<()> {
        let path = self.target(file_name);
        fs::remove_file(&path).map_err(|e| DismantleError::FileWriteError {
            path,
            details: format!("Failed to remove partial template: {}", e),
        })?;
        Ok(())
    }
}
