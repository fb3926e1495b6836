use crate::application::dto::{DismantleResponse, ExpansionSummary};
use crate::bundle_dismantling::domain::{ExpandedLine, RunMetadata};
use crate::ports::outbound::ResultFormatter;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct JsonDocument<'a> {
    metadata: &'a RunMetadata,
    summary: &'a ExpansionSummary,
    lines: &'a [ExpandedLine],
}

/// JsonFormatter adapter for a machine-readable document
///
/// Lines keep the output column names as keys and quantities are JSON
/// numbers.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultFormatter for JsonFormatter {
    fn format(&self, response: &DismantleResponse) -> Result<String> {
        let document = JsonDocument {
            metadata: &response.metadata,
            summary: &response.summary,
            lines: &response.lines,
        };
        let mut json = serde_json::to_string_pretty(&document)?;
        json.push('\n');
        Ok(json)
    }
}
