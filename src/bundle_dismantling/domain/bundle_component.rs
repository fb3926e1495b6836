use super::Quantity;

/// One row of the master table: `quantity` units of `child_code` are
/// contained in one unit of `parent_code`.
#[derive(Debug, Clone, PartialEq)]
pub struct BundleComponent {
    pub parent_code: String,
    pub child_code: String,
    pub quantity: Quantity,
}

impl BundleComponent {
    pub fn new(
        parent_code: impl Into<String>,
        child_code: impl Into<String>,
        quantity: Quantity,
    ) -> Self {
        Self {
            parent_code: parent_code.into(),
            child_code: child_code.into(),
            quantity,
        }
    }
}
