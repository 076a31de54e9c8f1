//! Currency display formatting.
//!
//! Every balance is a `rust_decimal::Decimal` and renders through
//! [`format_currency`]: integer part grouped in threes with `,`, exactly
//! two decimal digits after `.` — the "###,###,##0.00" pattern.

use rust_decimal::Decimal;

/// Formats an amount for display: "1234567.891" -> "1,234,567.89".
///
/// Rounds to two places half-even, then pads with zeros. The sign stays
/// ahead of the grouped digits for negative amounts.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let fixed = format!("{:.2}", rounded.abs());

    // `{:.2}` on an already-rounded Decimal only pads, never re-rounds.
    let (int_part, frac_part) = fixed
        .split_once('.')
        .unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let int_grouped: String = grouped.chars().rev().collect();

    let sign = if negative { "-" } else { "" };
    format!("{sign}{int_grouped}.{frac_part}")
}
