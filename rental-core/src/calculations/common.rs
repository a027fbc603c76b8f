//! Shared arithmetic for the rental waterfall.

use rust_decimal::Decimal;

/// Applies a whole-number percentage to an amount.
///
/// Saturates at the `Decimal` bounds instead of overflowing.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use rental_core::calculations::common::percent_of;
///
/// assert_eq!(percent_of(dec!(10200), dec!(15)), dec!(1530));
/// assert_eq!(percent_of(dec!(10200), dec!(0)), dec!(0));
/// assert_eq!(percent_of(dec!(-200), dec!(10)), dec!(-20));
/// ```
pub fn percent_of(
    amount: Decimal,
    percent: Decimal,
) -> Decimal {
    amount.saturating_mul(percent / Decimal::ONE_HUNDRED)
}

/// Clamps negative amounts to zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use rental_core::calculations::common::non_negative;
///
/// assert_eq!(non_negative(dec!(360)), dec!(360));
/// assert_eq!(non_negative(dec!(-200)), dec!(0));
/// ```
pub fn non_negative(value: Decimal) -> Decimal {
    if value > Decimal::ZERO { value } else { Decimal::ZERO }
}
