//! Currency display in French conventions (`10 200,0 €`).

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Thousands separator used by fr-FR: narrow no-break space.
const GROUP_SEPARATOR: char = '\u{202f}';
/// Space between the amount and the currency sign: no-break space.
const CURRENCY_SPACE: char = '\u{a0}';

/// Formats an amount as euros with one decimal digit.
///
/// Rounds half away from zero. A value that rounds to zero is printed
/// without a sign.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use rental_cli::format::format_eur;
///
/// assert_eq!(format_eur(dec!(10200)), "10\u{202f}200,0\u{a0}€");
/// assert_eq!(format_eur(dec!(-660)), "-660,0\u{a0}€");
/// ```
pub fn format_eur(amount: Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(1);

    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = rounded.abs().to_string();
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), "0"));

    let mut out = String::with_capacity(digits.len() + 8);
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    out.push(',');
    out.push_str(frac_part);
    out.push(CURRENCY_SPACE);
    out.push('€');
    out
}

/// Like [`format_eur`] for floating point input; NaN and infinities print
/// as zero rather than leaking into the display.
pub fn format_eur_f64(amount: f64) -> String {
    let value = if amount.is_finite() {
        Decimal::from_f64(amount).unwrap_or(Decimal::ZERO)
    } else {
        Decimal::ZERO
    };
    format_eur(value)
}

fn group_thousands(int_part: &str) -> String {
    let len = int_part.len();
    let mut out = String::with_capacity(len + len / 3 * 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn plain(s: String) -> String {
        s.replace(GROUP_SEPARATOR, " ").replace(CURRENCY_SPACE, " ")
    }

    #[test]
    fn format_eur_small_amount() {
        assert_eq!(plain(format_eur(dec!(360))), "360,0 €");
    }

    #[test]
    fn format_eur_groups_thousands() {
        assert_eq!(plain(format_eur(dec!(1530))), "1 530,0 €");
        assert_eq!(plain(format_eur(dec!(41400))), "41 400,0 €");
        assert_eq!(plain(format_eur(dec!(1234567.8))), "1 234 567,8 €");
    }

    #[test]
    fn format_eur_negative_amount() {
        assert_eq!(plain(format_eur(dec!(-3300))), "-3 300,0 €");
    }

    #[test]
    fn format_eur_rounds_half_away_from_zero() {
        assert_eq!(plain(format_eur(dec!(0.25))), "0,3 €");
        assert_eq!(plain(format_eur(dec!(-0.25))), "-0,3 €");
        assert_eq!(plain(format_eur(dec!(99.94))), "99,9 €");
    }

    #[test]
    fn format_eur_negative_zero_has_no_sign() {
        assert_eq!(plain(format_eur(dec!(-0.04))), "0,0 €");
    }

    #[test]
    fn format_eur_uses_narrow_no_break_space() {
        assert_eq!(format_eur(dec!(1000)), "1\u{202f}000,0\u{a0}€");
    }

    #[test]
    fn format_eur_f64_non_finite_is_zero() {
        assert_eq!(plain(format_eur_f64(f64::NAN)), "0,0 €");
        assert_eq!(plain(format_eur_f64(f64::INFINITY)), "0,0 €");
        assert_eq!(plain(format_eur_f64(f64::NEG_INFINITY)), "0,0 €");
    }

    #[test]
    fn format_eur_f64_finite_value() {
        assert_eq!(plain(format_eur_f64(2760.0)), "2 760,0 €");
    }
}
