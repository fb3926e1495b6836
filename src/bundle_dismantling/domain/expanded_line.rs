use super::{OrderDetails, Quantity};
use serde::Serialize;

/// Column headers of the expanded table, in output order
pub const OUTPUT_COLUMNS: [&str; 8] = [
    "PaymentTime",
    "OrderNumber",
    "OrderStatus",
    "Channel",
    "StoreName",
    "RefNo",
    "ChildCode",
    "Quantity",
];

/// Output row: the originating order's details plus one child product and
/// its effective quantity.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExpandedLine {
    #[serde(flatten)]
    pub details: OrderDetails,
    pub child_code: String,
    pub quantity: Quantity,
}

impl ExpandedLine {
    pub fn new(details: OrderDetails, child_code: impl Into<String>, quantity: Quantity) -> Self {
        Self {
            details,
            child_code: child_code.into(),
            quantity,
        }
    }

    /// Cell values in `OUTPUT_COLUMNS` order
    pub fn to_record(&self) -> [String; 8] {
        [
            self.details.payment_time.clone(),
            self.details.order_number.clone(),
            self.details.order_status.clone(),
            self.details.channel.clone(),
            self.details.store_name.clone(),
            self.details.ref_no.clone(),
            self.child_code.clone(),
            self.quantity.to_string(),
        ]
    }
}
