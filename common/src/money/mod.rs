//! Decimal money utilities for catalog prices and order totals

use rust_decimal::Decimal;
pub use rust_decimal_macros::dec;

/// Product price with high precision
pub type Price = Decimal;

/// Monetary amount with high precision (typically a sum of prices)
pub type Amount = Decimal;

/// Precision helpers for common operations
pub mod precision {
    use super::*;

    /// Default money precision (2 decimal places, whole cents)
    pub const MONEY_PRECISION: u32 = 2;

    /// Round a price or amount to standard money precision
    pub fn round_money(value: Amount) -> Amount {
        value.round_dp(MONEY_PRECISION)
    }
}
