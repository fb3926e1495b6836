use std::path::PathBuf;

/// A file plus the sheet to read from it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSource {
    pub path: PathBuf,
    /// `None` selects the first sheet
    pub sheet: Option<String>,
}

impl TableSource {
    pub fn new(path: impl Into<PathBuf>, sheet: Option<String>) -> Self {
        Self {
            path: path.into(),
            sheet,
        }
    }

    /// `path` or `path [sheet]`, for progress messages
    pub fn describe(&self) -> String {
        match &self.sheet {
            Some(sheet) => format!("{} [{}]", self.path.display(), sheet),
            None => self.path.display().to_string(),
        }
    }
}

/// DismantleRequest - Request DTO for the bundle dismantling use case
#[derive(Debug, Clone)]
pub struct DismantleRequest {
    /// Order table location
    pub orders: TableSource,
    /// Master bundle table location
    pub master: TableSource,
    /// Fail when either table has no data rows instead of producing empty output
    pub reject_empty: bool,
}

impl DismantleRequest {
    pub fn new(orders: TableSource, master: TableSource, reject_empty: bool) -> Self {
        Self {
            orders,
            master,
            reject_empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_without_sheet() {
        let source = TableSource::new("orders.csv", None);
        assert_eq!(source.describe(), "orders.csv");
    }

    #[test]
    fn test_describe_with_sheet() {
        let source = TableSource::new("orders.xlsx", Some("May".to_string()));
        assert_eq!(source.describe(), "orders.xlsx [May]");
    }
}
