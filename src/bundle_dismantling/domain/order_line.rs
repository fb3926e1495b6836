use serde::Serialize;

/// The order attributes that are carried unchanged from an order row to
/// every line it expands into.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderDetails {
    pub payment_time: String,
    pub order_number: String,
    pub order_status: String,
    pub channel: String,
    pub store_name: String,
    pub ref_no: String,
}

/// One row of the order table.
///
/// `quantity` holds the raw cell text; it is validated when the line is
/// expanded so that a bad value can be reported with its order number and SKU.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderLine {
    pub details: OrderDetails,
    pub sku: String,
    pub quantity: String,
}

impl OrderLine {
    pub fn new(details: OrderDetails, sku: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            details,
            sku: sku.into(),
            quantity: quantity.into(),
        }
    }

    pub fn order_number(&self) -> &str {
        &self.details.order_number
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_line_new() {
        let details = OrderDetails {
            order_number: "SO-1".to_string(),
            ..Default::default()
        };
        let line = OrderLine::new(details, "BUNDLE_01", "2");
        assert_eq!(line.order_number(), "SO-1");
        assert_eq!(line.sku, "BUNDLE_01");
        assert_eq!(line.quantity, "2");
    }

    #[test]
    fn test_order_details_serialize_pascal_case() {
        let details = OrderDetails {
            payment_time: "2024-05-01 10:00:00".to_string(),
            ref_no: "R-9".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(json["PaymentTime"], "2024-05-01 10:00:00");
        assert_eq!(json["RefNo"], "R-9");
        assert!(json.get("StoreName").is_some());
    }
}
