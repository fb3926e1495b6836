use crate::application::dto::DismantleResponse;
use crate::bundle_dismantling::domain::{Table, OUTPUT_COLUMNS};
use crate::ports::outbound::ResultFormatter;
use crate::shared::Result;
use anyhow::Context;

/// CsvFormatter adapter for the expanded table as comma-separated values
///
/// One header row followed by one row per expanded line. Output for the
/// same inputs is byte-identical across runs.
pub struct CsvFormatter;

impl CsvFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Renders an arbitrary table, used for the starter templates
    pub fn format_table(&self, table: &Table) -> Result<String> {
        Self::write_records(table.headers(), table.rows())
    }

    fn write_records<H, R>(headers: H, rows: &[R]) -> Result<String>
    where
        H: IntoIterator,
        H::Item: AsRef<[u8]>,
        R: AsRef<[String]>,
    {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record(headers)
            .context("Failed to write CSV header")?;
        for row in rows {
            writer
                .write_record(row.as_ref())
                .context("Failed to write CSV row")?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("Failed to flush CSV output: {}", e))?;
        String::from_utf8(bytes).context("CSV output is not valid UTF-8")
    }
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultFormatter for CsvFormatter {
    fn format(&self, response: &DismantleResponse) -> Result<String> {
        let rows: Vec<[String; 8]> = response.lines.iter().map(|l| l.to_record()).collect();
        Self::write_records(OUTPUT_COLUMNS, &rows)
    }
}
