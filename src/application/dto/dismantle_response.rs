use super::ExpansionSummary;
use crate::bundle_dismantling::domain::{ExpandedLine, RunMetadata};

/// DismantleResponse - Response DTO from the bundle dismantling use case
///
/// Formatters render this into the requested output format.
#[derive(Debug, Clone)]
pub struct DismantleResponse {
    /// Expanded lines in output order
    pub lines: Vec<ExpandedLine>,
    pub summary: ExpansionSummary,
    /// Run timestamp, tool info and run id
    pub metadata: RunMetadata,
}

impl DismantleResponse {
    pub fn new(lines: Vec<ExpandedLine>, summary: ExpansionSummary, metadata: RunMetadata) -> Self {
        Self {
            lines,
            summary,
            metadata,
        }
    }
}
