//! Normalization of user-typed numbers before they reach the calculations.
//!
//! The calculations assume well-formed numbers, so anything a person might
//! type into a cell is coerced here: blanks and junk become zero.

use rust_decimal::Decimal;

/// Trims whitespace and removes commas (thousands separator).
fn normalize_amount_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses an amount or percentage, falling back to zero.
///
/// Handles comma as thousands separator (e.g. `"1,234.56"`). Empty or
/// whitespace-only input is zero. Text that is not a number is also zero,
/// with a warning logged.
pub fn parse_amount(s: &str) -> Decimal {
    let normalized = normalize_amount_input(s);
    if normalized.is_empty() {
        return Decimal::ZERO;
    }
    normalized.parse().unwrap_or_else(|e| {
        tracing::warn!(input = %s, "non-numeric amount treated as 0: {}", e);
        Decimal::ZERO
    })
}

/// Like [`parse_amount`], but an absent cell takes `default` instead.
pub fn parse_amount_or(
    s: Option<&str>,
    default: Decimal,
) -> Decimal {
    match s {
        Some(s) => parse_amount(s),
        None => default,
    }
}
