//! Money rounding and display formatting.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds an amount half-up (midpoint away from zero) to exactly two
/// decimal places.
///
/// # Examples
///
/// ```
/// use employee_payroll::calculation::round_money;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rounded = round_money(Decimal::from_str("15781.8181").unwrap());
/// assert_eq!(rounded.to_string(), "15781.82");
///
/// let padded = round_money(Decimal::from(5000));
/// assert_eq!(padded.to_string(), "5000.00");
/// ```
pub fn round_money(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// Formats an amount as `#,##0.00`: thousands separators and two decimals.
///
/// # Examples
///
/// ```
/// use employee_payroll::calculation::format_amount;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(format_amount(Decimal::from_str("17600").unwrap()), "17,600.00");
/// assert_eq!(format_amount(Decimal::from_str("0.5").unwrap()), "0.50");
/// ```
pub fn format_amount(amount: Decimal) -> String {
    let rounded = round_money(amount);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = rounded.abs().to_string();
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped}.{fraction}")
}
