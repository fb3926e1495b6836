use crate::application::dto::{DismantleRequest, DismantleResponse, ExpansionSummary, TableSource};
use crate::bundle_dismantling::domain::{ExpandedLine, OrderLine, Table};
use crate::bundle_dismantling::services::{
    BundleExpander, MappingIndex, MetadataGenerator, TableDecoder,
};
use crate::ports::outbound::{ProgressReporter, TableReader};
use crate::shared::error::DismantleError;
use crate::shared::Result;

/// Order lines expanded between two progress updates
const PROGRESS_CHUNK_SIZE: usize = 500;

/// DismantleBundlesUseCase - Core use case for bundle dismantling
///
/// Loads both tables through the `TableReader` port, decodes them, builds
/// the mapping index once and expands the orders. Any error aborts the run
/// and no lines are returned.
///
/// # Type Parameters
/// * `TR` - TableReader implementation
/// * `PR` - ProgressReporter implementation
pub struct DismantleBundlesUseCase<TR, PR> {
    table_reader: TR,
    progress_reporter: PR,
}

impl<TR, PR> DismantleBundlesUseCase<TR, PR>
where
    TR: TableReader,
    PR: ProgressReporter,
{
    /// Creates a new DismantleBundlesUseCase with injected dependencies
    pub fn new(table_reader: TR, progress_reporter: PR) -> Self {
        Self {
            table_reader,
            progress_reporter,
        }
    }

    /// Executes the dismantling use case
    ///
    /// # Returns
    /// DismantleResponse containing the expanded lines, row counts and run metadata
    pub fn execute(&self, request: DismantleRequest) -> Result<DismantleResponse> {
        let result = self.dismantle(request);
        if result.is_err() {
            self.progress_reporter
                .report_error("⚠️  Dismantling aborted; no lines were produced");
        }
        result
    }

    fn dismantle(&self, request: DismantleRequest) -> Result<DismantleResponse> {
        // Step 1: Load both tables
        let order_table = self.load_table("order", &request.orders)?;
        let master_table = self.load_table("master", &request.master)?;

        // Step 2: Strict mode rejects empty sheets before any work
        if request.reject_empty && (order_table.is_empty() || master_table.is_empty()) {
            return Err(DismantleError::validation("One or both selected sheets are empty").into());
        }

        // Step 3: Decode rows and build the mapping index
        let orders = TableDecoder::orders(&order_table)?;
        let components = TableDecoder::components(&master_table)?;
        let index = MappingIndex::build(components)?;
        self.progress_reporter.report(&format!(
            "🧩 Indexed {} bundle(s) with {} component row(s)",
            index.bundle_count(),
            index.component_count()
        ));

        // Step 4: Expand
        let lines = self.expand_with_progress(&orders, &index)?;
        let summary = Self::summarize(&orders, &index, &lines);
        self.progress_reporter.report_completion(&format!(
            "✅ Expanded {} order line(s) into {} line(s) ({} bundle, {} pass-through)",
            summary.order_lines,
            summary.output_lines,
            summary.bundle_lines,
            summary.passthrough_lines
        ));

        Ok(DismantleResponse::new(
            lines,
            summary,
            MetadataGenerator::generate_default_metadata(),
        ))
    }

    fn load_table(&self, role: &str, source: &TableSource) -> Result<Table> {
        self.progress_reporter.report(&format!(
            "📖 Loading {} table from: {}",
            role,
            source.describe()
        ));

        let table = self
            .table_reader
            .read_table(&source.path, source.sheet.as_deref())?;

        self.progress_reporter
            .report(&format!("✅ Read {} {} row(s)", table.record_count(), role));
        Ok(table)
    }

    /// Expands chunk by chunk so progress can be reported; chunking does not
    /// change the output because each order line expands independently.
    fn expand_with_progress(
        &self,
        orders: &[OrderLine],
        index: &MappingIndex,
    ) -> Result<Vec<ExpandedLine>> {
        let total = orders.len();
        let mut lines = Vec::with_capacity(BundleExpander::expanded_len(orders, index));
        let mut processed = 0;

        for chunk in orders.chunks(PROGRESS_CHUNK_SIZE) {
            lines.extend(BundleExpander::expand(chunk, index)?);
            processed += chunk.len();
            self.progress_reporter
                .report_progress(processed, total, Some("Expanding order lines"));
        }

        Ok(lines)
    }

    fn summarize(
        orders: &[OrderLine],
        index: &MappingIndex,
        lines: &[ExpandedLine],
    ) -> ExpansionSummary {
        let bundle_lines = orders
            .iter()
            .filter(|order| index.contains(&order.sku))
            .count();

        ExpansionSummary {
            order_lines: orders.len(),
            bundle_lines,
            passthrough_lines: orders.len() - bundle_lines,
            output_lines: lines.len(),
        }
    }
}
