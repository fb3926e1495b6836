pub mod bundle_component;
pub mod expanded_line;
pub mod order_line;
pub mod quantity;
pub mod run_metadata;
pub mod table;

pub use bundle_component::BundleComponent;
pub use expanded_line::{ExpandedLine, OUTPUT_COLUMNS};
pub use order_line::{OrderDetails, OrderLine};
pub use quantity::{Quantity, QuantityError};
pub use run_metadata::RunMetadata;
pub use table::Table;
