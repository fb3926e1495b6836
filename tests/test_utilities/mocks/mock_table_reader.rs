use bundle_dismantle::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mock TableReader serving in-memory sheets keyed by file and sheet name
///
/// The first sheet registered for a file is its default sheet.
#[derive(Default)]
pub struct MockTableReader {
    sheets: HashMap<PathBuf, Vec<(String, Table)>>,
    should_fail: bool,
}

impl MockTableReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sheet(mut self, path: &str, sheet: &str, table: Table) -> Self {
        self.sheets
            .entry(PathBuf::from(path))
            .or_default()
            .push((sheet.to_string(), table));
        self
    }

    pub fn with_failure() -> Self {
        Self {
            sheets: HashMap::new(),
            should_fail: true,
        }
    }

    fn file(&self, path: &Path) -> Result<&[(String, Table)]> {
        if self.should_fail {
            anyhow::bail!("Mock read failure: {}", path.display());
        }
        self.sheets
            .get(path)
            .map(Vec::as_slice)
            .ok_or_else(|| {
                DismantleError::InputNotFound {
                    path: path.to_path_buf(),
                }
                .into()
            })
    }
}

impl TableReader for MockTableReader {
    fn sheet_names(&self, path: &Path) -> Result<Vec<String>> {
        Ok(self.file(path)?.iter().map(|(name, _)| name.clone()).collect())
    }

    fn read_table(&self, path: &Path, sheet: Option<&str>) -> Result<Table> {
        let sheets = self.file(path)?;
        let found = match sheet {
            Some(name) => sheets.iter().find(|(n, _)| n == name),
            None => sheets.first(),
        };

        found.map(|(_, table)| table.clone()).ok_or_else(|| {
            DismantleError::SheetNotFound {
                path: path.to_path_buf(),
                sheet: sheet.unwrap_or_default().to_string(),
                available: sheets
                    .iter()
                    .map(|(n, _)| n.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            }
            .into()
        })
    }
}
