//! bundle-dismantle - bundle SKU expansion for order exports
//!
//! This library turns order lines that reference bundle SKUs into one line
//! per child product, using a master table that lists the components of
//! each bundle. It follows hexagonal architecture and Domain-Driven Design
//! principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`bundle_dismantling`): Pure business logic and domain models
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use bundle_dismantle::prelude::*;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let table_reader = FileSystemTableReader::new();
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = DismantleBundlesUseCase::new(table_reader, progress_reporter);
//!
//! // Execute
//! let request = DismantleRequest::new(
//!     TableSource::new("orders.xlsx", Some("Orders".to_string())),
//!     TableSource::new("master.csv", None),
//!     false,
//! );
//! let response = use_case.execute(request)?;
//!
//! // Format output
//! let output = CsvFormatter::new().format(&response)?;
//! print!("{}", output);
//! # Ok(())
//! # }
//! ```
//!
//! The expansion itself needs no I/O:
//!
//! ```
//! use bundle_dismantle::prelude::*;
//!
//! let index = MappingIndex::build(vec![
//!     BundleComponent::new("BUNDLE_01", "CHILD_001", Quantity::Integer(1)),
//!     BundleComponent::new("BUNDLE_01", "CHILD_002", Quantity::Integer(2)),
//! ])
//! .unwrap();
//!
//! let order = OrderLine::new(OrderDetails::default(), "BUNDLE_01", "3");
//! let lines = BundleExpander::expand(&[order], &index).unwrap();
//!
//! assert_eq!(lines.len(), 2);
//! assert_eq!(lines[1].quantity, Quantity::Integer(6));
//! ```

pub mod adapters;
pub mod application;
pub mod bundle_dismantling;
pub mod cli;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        CsvTemplateDirectory, FileSystemTableReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        CsvFormatter, JsonFormatter, MarkdownFormatter,
    };
    pub use crate::application::dto::{
        DismantleRequest, DismantleResponse, ExpansionSummary, OutputFormat, TableSource,
    };
    pub use crate::application::use_cases::{DismantleBundlesUseCase, GenerateTemplatesUseCase};
    pub use crate::bundle_dismantling::domain::{
        BundleComponent, ExpandedLine, OrderDetails, OrderLine, Quantity, Table,
    };
    pub use crate::bundle_dismantling::services::{
        BundleExpander, MappingIndex, TableDecoder, TemplateGenerator,
    };
    pub use crate::ports::outbound::{
        OutputPresenter, ProgressReporter, ResultFormatter, TableReader, TemplateWriter,
    };
    pub use crate::shared::error::DismantleError;
    pub use crate::shared::Result;
}
