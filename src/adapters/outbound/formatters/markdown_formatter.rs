use crate::application::dto::{DismantleResponse, ExpansionSummary};
use crate::bundle_dismantling::domain::OUTPUT_COLUMNS;
use crate::ports::outbound::ResultFormatter;
use crate::shared::Result;

/// MarkdownFormatter adapter for a human-readable report
///
/// Renders a short summary followed by the expanded table.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn render_row<'a>(output: &mut String, cells: impl IntoIterator<Item = &'a str>) {
        output.push('|');
        for cell in cells {
            output.push(' ');
            output.push_str(&Self::escape_markdown_table_cell(cell));
            output.push_str(" |");
        }
        output.push('\n');
    }

    fn render_summary(output: &mut String, summary: &ExpansionSummary) {
        output.push_str("## Summary\n\n");
        output.push_str(&format!("- Order lines: {}\n", summary.order_lines));
        output.push_str(&format!("- Bundle lines dismantled: {}\n", summary.bundle_lines));
        output.push_str(&format!("- Lines passed through: {}\n", summary.passthrough_lines));
        output.push_str(&format!("- Output lines: {}\n\n", summary.output_lines));
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultFormatter for MarkdownFormatter {
    fn format(&self, response: &DismantleResponse) -> Result<String> {
        let mut output = String::from("# Dismantled Order Lines\n\n");
        output.push_str(&format!(
            "Generated by {} {} at {}\n\n",
            response.metadata.tool_name(),
            response.metadata.tool_version(),
            response.metadata.timestamp()
        ));

        Self::render_summary(&mut output, &response.summary);

        output.push_str("## Lines\n\n");
        Self::render_row(&mut output, OUTPUT_COLUMNS);
        Self::render_row(&mut output, OUTPUT_COLUMNS.iter().map(|_| "---"));
        for line in &response.lines {
            let record = line.to_record();
            Self::render_row(&mut output, record.iter().map(String::as_str));
        }

        Ok(output)
    }
}
