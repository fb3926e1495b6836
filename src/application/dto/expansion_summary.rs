use serde::Serialize;

/// Row counts describing one expansion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExpansionSummary {
    /// Order lines read
    pub order_lines: usize,
    /// Order lines whose SKU matched a bundle
    pub bundle_lines: usize,
    /// Order lines passed through unchanged
    pub passthrough_lines: usize,
    /// Lines written to the output table
    pub output_lines: usize,
}
