use serde::{Serialize, Serializer};
use thiserror::Error;

/// Reasons a cell cannot be read as a quantity
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuantityError {
    #[error("quantity is missing")]
    Missing,
    #[error("'{0}' is not a number")]
    NotNumeric(String),
    #[error("'{0}' is negative")]
    Negative(String),
    #[error("'{0}' is not a finite number")]
    NotFinite(String),
    #[error("effective quantity overflows")]
    Overflow,
}

/// Quantity value object: a finite, non-negative count of units.
///
/// Integer cells stay integers; anything with a fractional part or an
/// exponent becomes `Decimal`. Multiplication keeps the wider of the two
/// operand types, so `Integer x Decimal` yields `Decimal`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Quantity {
    Integer(u64),
    Decimal(f64),
}

impl Quantity {
    /// Parses a table cell.
    ///
    /// Surrounding whitespace is ignored. An empty cell is `Missing`.
    pub fn parse(text: &str) -> Result<Self, QuantityError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(QuantityError::Missing);
        }

        if let Ok(value) = trimmed.parse::<u64>() {
            return Ok(Quantity::Integer(value));
        }

        let value: f64 = trimmed
            .parse()
            .map_err(|_| QuantityError::NotNumeric(trimmed.to_string()))?;
        Self::from_f64(value).map_err(|e| match e {
            QuantityError::Negative(_) => QuantityError::Negative(trimmed.to_string()),
            QuantityError::NotFinite(_) => QuantityError::NotFinite(trimmed.to_string()),
            other => other,
        })
    }

    pub fn from_f64(value: f64) -> Result<Self, QuantityError> {
        if !value.is_finite() {
            return Err(QuantityError::NotFinite(value.to_string()));
        }
        if value < 0.0 {
            return Err(QuantityError::Negative(value.to_string()));
        }
        // -0.0 passes the sign check above
        Ok(Quantity::Decimal(value.abs()))
    }

    pub fn as_f64(self) -> f64 {
        match self {
            Quantity::Integer(value) => value as f64,
            Quantity::Decimal(value) => value,
        }
    }

    pub fn is_integer(self) -> bool {
        matches!(self, Quantity::Integer(_))
    }

    /// Multiplies two quantities without rounding.
    ///
    /// # Errors
    /// `Overflow` if an integer product exceeds `u64` or a decimal product is not finite
    pub fn checked_mul(self, other: Quantity) -> Result<Quantity, QuantityError> {
        match (self, other) {
            (Quantity::Integer(a), Quantity::Integer(b)) => a
                .checked_mul(b)
                .map(Quantity::Integer)
                .ok_or(QuantityError::Overflow),
            (a, b) => {
                let product = a.as_f64() * b.as_f64();
                if product.is_finite() {
                    Ok(Quantity::Decimal(product))
                } else {
                    Err(QuantityError::Overflow)
                }
            }
        }
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Quantity::Integer(value) => write!(f, "{}", value),
            // Debug keeps the fractional part on whole decimals ("2.0")
            Quantity::Decimal(value) => write!(f, "{:?}", value),
        }
    }
}

impl Serialize for Quantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Quantity::Integer(value) => serializer.serialize_u64(*value),
            Quantity::Decimal(value) => serializer.serialize_f64(*value),
        }
    }
}
