//! Display formatting for money and dates.

use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

/// The symbol prefixed to formatted amounts.
pub const CURRENCY_SYMBOL: &str = "₹";

/// The text produced by [format_date] for input it cannot read.
pub const INVALID_DATE: &str = "Invalid Date";

const ISO_DATE_FORMAT: &[BorrowedFormatItem] = format_description!("[year]-[month]-[day]");

// en-IN short date, e.g. "5 Mar 2024".
const DISPLAY_DATE_FORMAT: &[BorrowedFormatItem] =
    format_description!("[day padding:none] [month repr:short] [year]");

/// Format `amount` with two decimal places and the currency symbol, e.g. "₹1234.50".
///
/// NaN is rendered as "₹NaN" rather than rejected.
pub fn format_currency(amount: f64) -> String {
    let digits = if amount.is_nan() {
        "NaN".to_owned()
    } else if amount == f64::INFINITY {
        "Infinity".to_owned()
    } else if amount == f64::NEG_INFINITY {
        "-Infinity".to_owned()
    } else if amount == 0.0 {
        // Avoids printing negative zero as "-0.00".
        "0.00".to_owned()
    } else {
        to_fixed_2(amount)
    };

    format!("{CURRENCY_SYMBOL}{digits}")
}

/// Format a finite `value` with two decimals the way JS `toFixed(2)` does.
///
/// Inexact values round to the nearest cent, which `{:.2}` already gets
/// right. Values exactly halfway between two cents round away from zero,
/// where `{:.2}` would round to even.
fn to_fixed_2(value: f64) -> String {
    let Some(doubled_cents) = exact_half_cent_tie(value.abs()) else {
        return format!("{value:.2}");
    };

    let cents = (doubled_cents + 1) / 2;
    let sign = if value.is_sign_negative() { "-" } else { "" };

    format!("{sign}{}.{:02}", cents / 100, cents % 100)
}

/// If `magnitude` lies exactly halfway between two cents, return
/// `magnitude * 200`, which is then an odd integer.
fn exact_half_cent_tie(magnitude: f64) -> Option<u128> {
    let bits = magnitude.to_bits();
    let biased_exponent = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1 << 52) - 1);

    // magnitude == mantissa * 2^exponent exactly.
    let (mantissa, exponent) = if biased_exponent == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1 << 52), biased_exponent - 1075)
    };

    if mantissa == 0 || exponent >= 0 {
        return None;
    }

    // magnitude * 200 == mantissa * 200 / 2^-exponent, an odd integer
    // exactly when the power of two in the numerator matches the divisor.
    let scaled = u128::from(mantissa) * 200;
    if i64::from(scaled.trailing_zeros()) != -i64::from(exponent) {
        return None;
    }

    Some(scaled >> -exponent)
}

/// Read the leading number from `text` and format it with [format_currency].
///
/// "12.5 apples" becomes "₹12.50" and "abc" becomes "₹NaN".
pub fn format_currency_str(text: &str) -> String {
    format_currency(parse_float_prefix(text))
}

/// Parse the longest numeric prefix of `text` after leading whitespace.
///
/// Mirrors how browsers read numbers typed into text fields: trailing
/// garbage is ignored and text without a leading number is NaN.
pub fn parse_float_prefix(text: &str) -> f64 {
    let text = text.trim_start();

    for (prefix, value) in [
        ("Infinity", f64::INFINITY),
        ("+Infinity", f64::INFINITY),
        ("-Infinity", f64::NEG_INFINITY),
    ] {
        if text.starts_with(prefix) {
            return value;
        }
    }

    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let integer_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut mantissa_digits = end - integer_start;

    if bytes.get(end) == Some(&b'.') {
        let fraction_start = end + 1;
        let mut fraction_end = fraction_start;
        while bytes.get(fraction_end).is_some_and(u8::is_ascii_digit) {
            fraction_end += 1;
        }
        mantissa_digits += fraction_end - fraction_start;
        end = fraction_end;
    }

    if mantissa_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent_end = end + 1;
        if matches!(bytes.get(exponent_end), Some(b'+' | b'-')) {
            exponent_end += 1;
        }
        let digits_start = exponent_end;
        while bytes.get(exponent_end).is_some_and(u8::is_ascii_digit) {
            exponent_end += 1;
        }
        if exponent_end > digits_start {
            end = exponent_end;
        }
    }

    // A trailing '.' without fraction digits is still a valid number, e.g. "5.".
    text[..end]
        .trim_end_matches('.')
        .parse::<f64>()
        .unwrap_or(f64::NAN)
}

/// Format an ISO-8601 date string (`YYYY-MM-DD`, optionally followed by a
/// `T` and a time) as a short date, e.g. "2024-03-05" becomes "5 Mar 2024".
///
/// Returns [INVALID_DATE] if `date_string` is not a valid date.
pub fn format_date(date_string: &str) -> String {
    let date_part = date_string
        .trim()
        .split_once('T')
        .map_or(date_string.trim(), |(date, _time)| date);

    match Date::parse(date_part, ISO_DATE_FORMAT) {
        Ok(date) => format_display_date(date),
        Err(_) => INVALID_DATE.to_owned(),
    }
}

/// Format `date` as a short date, e.g. "5 Mar 2024".
pub fn format_display_date(date: Date) -> String {
    date.format(DISPLAY_DATE_FORMAT)
        .unwrap_or_else(|_| INVALID_DATE.to_owned())
}
