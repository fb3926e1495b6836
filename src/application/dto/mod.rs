/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod dismantle_request;
mod dismantle_response;
mod expansion_summary;
mod output_format;

pub use dismantle_request::{DismantleRequest, TableSource};
pub use dismantle_response::DismantleResponse;
pub use expansion_summary::ExpansionSummary;
pub use output_format::OutputFormat;
