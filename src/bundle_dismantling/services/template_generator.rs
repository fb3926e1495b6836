use super::table_decoder::{MASTER_COLUMNS, ORDER_COLUMNS};
use crate::bundle_dismantling::domain::Table;

pub const ORDER_TEMPLATE_FILE: &str = "Order_Template.csv";
pub const MASTER_TEMPLATE_FILE: &str = "Master_Bundle_Template.csv";

/// TemplateGenerator - fixed-content starter tables for new users
pub struct TemplateGenerator;

impl TemplateGenerator {
    /// Order table with one bundle line and one single-product line
    pub fn order_template() -> Table {
        Table::from_strs(
            &ORDER_COLUMNS,
            &[
                &[
                    "2024-01-15 10:30:00",
                    "ORD-0001",
                    "Completed",
                    "Shopee",
                    "Main Store",
                    "REF-0001",
                    "BUNDLE_01",
                    "1",
                ],
                &[
                    "2024-01-15 11:05:00",
                    "ORD-0002",
                    "Completed",
                    "Lazada",
                    "Main Store",
                    "REF-0002",
                    "SINGLE_02",
                    "1",
                ],
            ],
        )
    }

    /// Master table; `ProductName` is informational and ignored when decoding
    pub fn master_template() -> Table {
        Table::from_strs(
            &[
                MASTER_COLUMNS[0],
                MASTER_COLUMNS[1],
                "ProductName",
                MASTER_COLUMNS[2],
            ],
            &[
                &["BUNDLE_01", "CHILD_001", "Child Product 1", "1"],
                &["BUNDLE_01", "CHILD_002", "Child Product 2", "1"],
                &["PARENT_02", "CHILD_001", "Child Product 1", "2"],
            ],
        )
    }

    /// Templates paired with their file names
    pub fn all() -> Vec<(&'static str, Table)> {
        vec![
            (ORDER_TEMPLATE_FILE, Self::order_template()),
            (MASTER_TEMPLATE_FILE, Self::master_template()),
        ]
    }
}
