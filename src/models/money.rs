use rust_decimal::Decimal;

pub(crate) const CURRENCY: &str = "₹";

/// Format a decimal amount with thousand separators and 2 decimal places.
/// e.g. `1234567.89` → `"₹1,234,567.89"`
pub(crate) fn format_amount(val: Decimal) -> String {
    let abs = val.abs();
    let formatted = format!("{abs:.2}");
    let mut parts = formatted.split('.');
    let int_part = parts.next().unwrap_or("0");
    let dec_part = parts.next().unwrap_or("00");

    let with_commas: String = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",");

    if val < Decimal::ZERO {
        format!("-{CURRENCY}{with_commas}.{dec_part}")
    } else {
        format!("{CURRENCY}{with_commas}.{dec_part}")
    }
}

#[cfg(test)]
#[path = "money_tests.rs"]
mod tests;
