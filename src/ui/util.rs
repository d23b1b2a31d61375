use regex::Regex;
use rust_decimal::Decimal;

/// Format a rupee amount with Indian digit grouping and 2 decimal places.
/// e.g. `1234567.89` → `"₹12,34,567.89"`
pub(crate) fn format_inr(val: Decimal) -> String {
    let abs = val.abs();
    let formatted = format!("{abs:.2}");
    let mut parts = formatted.split('.');
    let int_part = parts.next().unwrap_or("0");
    let dec_part = parts.next().unwrap_or("00");

    // Indian grouping: the last three digits, then pairs
    let split = int_part.len().saturating_sub(3);
    let (head, tail) = int_part.as_bytes().split_at(split);
    let mut groups: Vec<&str> = head
        .rchunks(2)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect();
    groups.push(std::str::from_utf8(tail).unwrap_or("0"));
    let with_commas = groups.join(",");

    if val < Decimal::ZERO {
        format!("-₹{with_commas}.{dec_part}")
    } else {
        format!("₹{with_commas}.{dec_part}")
    }
}

/// Parse a user-typed amount, tolerating currency symbols, grouping
/// separators and stray whitespace. Takes the first numeric run it finds;
/// anything unparseable becomes zero.
pub(crate) fn parse_amount(s: &str) -> Decimal {
    let Ok(re) = Regex::new(r"-?[\d,]*\.?\d+") else {
        return Decimal::ZERO;
    };
    re.find(s)
        .map(|m| m.as_str().replace(',', ""))
        .and_then(|n| n.parse::<Decimal>().ok())
        .unwrap_or(Decimal::ZERO)
}

/// Truncate a string to `max` visible characters, appending "…" if truncated.
/// Safe for multi-byte UTF-8 characters.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let char_count = s.chars().count();
    if char_count <= max {
        return s.to_string();
    }
    let truncated: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{truncated}…")
}
