//! Price formatting for display.
//!
//! Prices at or above one dollar get two rounded decimals and thousands
//! separators. Sub-dollar prices keep up to eight decimals, truncated rather
//! than rounded, with trailing zeros removed.

use crate::market::types::FormattedPrice;

/// Fractional digits kept for prices below one dollar.
pub const SUB_DOLLAR_DECIMALS: usize = 8;

/// Format a raw USD price, e.g. `$1,234.50` or `$0.0001234`.
pub fn format_price(price: f64) -> FormattedPrice {
    let body = if price >= 1.0 {
        group_thousands(&format!("{:.2}", price))
    } else {
        truncate_fraction(price, SUB_DOLLAR_DECIMALS)
    };
    FormattedPrice(format!("${}", body))
}

/// Same as `format_price`, as a plain `String`. Used for axis and tooltip labels.
pub fn format_price_label(price: f64) -> String {
    format_price(price).into_string()
}

/// Inserts `,` every three digits of the integer part.
pub fn group_thousands(formatted: &str) -> String {
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match fraction {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

/// Cuts the shortest round-trip decimal form of `price`, so no digit is ever
/// rounded up into the kept fraction.
fn truncate_fraction(price: f64, decimals: usize) -> String {
    let exact = price.to_string();
    let cut = match exact.find('.') {
        Some(dot) => &exact[..(dot + 1 + decimals).min(exact.len())],
        None => exact.as_str(),
    };
    strip_trailing_zeros(cut)
}

/// Trims trailing zeros, then a bare trailing decimal point.
pub fn strip_trailing_zeros(formatted: &str) -> String {
    if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted.to_string()
    }
}
