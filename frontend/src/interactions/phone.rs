/// Local numbers only; a country code is not expected in the field.
pub const MAX_DIGITS: usize = 10;

/// Rewrites whatever is in a telephone field as `XXX XXX XXXX`.
///
/// Recomputed from the digits alone on every input event, so partial numbers
/// come out as `123`, `123 45`, `123 456 7`.
pub fn format_phone(raw: &str) -> String {
    let digits: String = raw
        .chars()
        .filter(char::is_ascii_digit)
        .take(MAX_DIGITS)
        .collect();

    match digits.len() {
        0..=3 => digits,
        4..=6 => format!("{} {}", &digits[..3], &digits[3..]),
        _ => format!("{} {} {}", &digits[..3], &digits[3..6], &digits[6..]),
    }
}
