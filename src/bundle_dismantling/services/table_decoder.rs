use crate::bundle_dismantling::domain::table::cell;
use crate::bundle_dismantling::domain::{
    BundleComponent, OrderDetails, OrderLine, Quantity, Table,
};
use crate::shared::error::DismantleError;

/// Required columns of the order table, in decoding order
pub const ORDER_COLUMNS: [&str; 8] = [
    "PaymentTime",
    "OrderNumber",
    "OrderStatus",
    "Channel",
    "StoreName",
    "RefNo",
    "SKU",
    "Quantity",
];

/// Required columns of the master table, in decoding order
pub const MASTER_COLUMNS: [&str; 3] = ["ParentCode", "ChildCode", "Quantity"];

/// TableDecoder - turns already-parsed sheets into typed records
///
/// Extra columns are ignored. Product codes are trimmed; every other order
/// attribute is copied exactly as read.
pub struct TableDecoder;

impl TableDecoder {
    /// Decodes the order table.
    ///
    /// # Errors
    /// `Validation` if a required column is missing
    pub fn orders(table: &Table) -> Result<Vec<OrderLine>, DismantleError> {
        let columns = table.locate_columns("Order", &ORDER_COLUMNS)?;

        let orders = table
            .records()
            .map(|(_, row)| {
                let details = OrderDetails {
                    payment_time: cell(row, columns[0]).to_string(),
                    order_number: cell(row, columns[1]).to_string(),
                    order_status: cell(row, columns[2]).to_string(),
                    channel: cell(row, columns[3]).to_string(),
                    store_name: cell(row, columns[4]).to_string(),
                    ref_no: cell(row, columns[5]).to_string(),
                };
                OrderLine::new(
                    details,
                    cell(row, columns[6]).trim(),
                    cell(row, columns[7]),
                )
            })
            .collect();

        Ok(orders)
    }

    /// Decodes the master table.
    ///
    /// Codes are checked before the quantity on each row.
    ///
    /// # Errors
    /// - `Validation` if a required column is missing or a row has a blank
    ///   ParentCode or ChildCode
    /// - `DataType` naming parent code, child code and sheet row if a
    ///   component quantity is missing, non-numeric or negative
    pub fn components(table: &Table) -> Result<Vec<BundleComponent>, DismantleError> {
        let columns = table.locate_columns("Master", &MASTER_COLUMNS)?;

        table
            .records()
            .map(|(row_number, row)| -> Result<BundleComponent, DismantleError> {
                let parent_code = cell(row, columns[0]).trim();
                let child_code = cell(row, columns[1]).trim();
                for (column, code) in [("ParentCode", parent_code), ("ChildCode", child_code)] {
                    if code.is_empty() {
                        return Err(DismantleError::validation(format!(
                            "master row {} has a blank {}",
                            row_number, column
                        )));
                    }
                }
                let quantity = Quantity::parse(cell(row, columns[2])).map_err(|e| {
                    DismantleError::component_quantity(parent_code, child_code, row_number, e)
                })?;
                Ok(BundleComponent::new(parent_code, child_code, quantity))
            })
            .collect()
    }
}
