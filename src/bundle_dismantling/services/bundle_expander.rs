use super::MappingIndex;
use crate::bundle_dismantling::domain::{ExpandedLine, OrderLine, Quantity};
use crate::shared::error::DismantleError;

/// BundleExpander service - dismantles bundle SKUs into child product lines
///
/// Single pass, no recursion: a child code is emitted as found in the
/// master table even if it is a bundle itself.
pub struct BundleExpander;

impl BundleExpander {
    /// Expands order lines against the mapping index.
    ///
    /// Output follows input order; the lines of one bundle follow master order.
    /// A SKU with no components passes through with its own quantity.
    ///
    /// # Errors
    /// `DataType` naming the order number and SKU of the first line whose
    /// quantity is missing, non-numeric or negative, or whose effective
    /// quantity overflows. Nothing is returned on error.
    pub fn expand(
        orders: &[OrderLine],
        index: &MappingIndex,
    ) -> Result<Vec<ExpandedLine>, DismantleError> {
        let mut expanded = Vec::with_capacity(orders.len());

        for order in orders {
            let ordered = Quantity::parse(&order.quantity).map_err(|e| {
                DismantleError::order_quantity(order.order_number(), &order.sku, e)
            })?;

            let components = index.lookup(&order.sku);
            if components.is_empty() {
                expanded.push(ExpandedLine::new(
                    order.details.clone(),
                    order.sku.clone(),
                    ordered,
                ));
                continue;
            }

            for component in components {
                let effective = ordered.checked_mul(component.quantity).map_err(|e| {
                    DismantleError::order_quantity(order.order_number(), &order.sku, e)
                })?;
                expanded.push(ExpandedLine::new(
                    order.details.clone(),
                    component.child_code.clone(),
                    effective,
                ));
            }
        }

        Ok(expanded)
    }

    /// Number of lines `expand` produces: one per component, or one per
    /// unmatched order line
    pub fn expanded_len(orders: &[OrderLine], index: &MappingIndex) -> usize {
        orders
            .iter()
            .map(|order| index.lookup(&order.sku).len().max(1))
            .sum()
    }
}
