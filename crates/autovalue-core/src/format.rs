//! Display formatting for mileage and prices.

/// Currency symbol prefixed to every price
pub const CURRENCY_SYMBOL: &str = "$";

/// Insert `,` between groups of three digits
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `"45,210 miles"`
pub fn format_mileage(mileage: u32) -> String {
    let unit = if mileage == 1 { "mile" } else { "miles" };
    format!("{} {}", format_thousands(u64::from(mileage)), unit)
}

/// Price rounded to whole units, e.g. `"$14,500"`.
///
/// Negative amounts keep their sign in front of the symbol; non-finite
/// amounts render as a dash.
pub fn format_price(amount: f64) -> String {
    if !amount.is_finite() {
        return "-".to_string();
    }
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!(
        "{}{}{}",
        sign,
        CURRENCY_SYMBOL,
        format_thousands(rounded.abs() as u64)
    )
}
