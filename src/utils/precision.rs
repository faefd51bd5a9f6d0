// src/utils/precision.rs
use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary amount to cents, halves away from zero.
/// Example: 2.675 -> 2.68, 2.5 -> 2.50
pub fn normalize_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Renders an amount with exactly two decimal places.
pub fn format_money(amount: Decimal) -> String {
    format!("{:.2}", normalize_money(amount))
}
