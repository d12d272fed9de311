//! Shared utility functions.

/// Truncate a string to approximately `max_bytes` without splitting a UTF-8
/// character boundary.
///
/// Returns a sub-slice of the original string. If the string is shorter than
/// `max_bytes`, the entire string is returned unchanged.
pub fn truncate_str(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Format an integer with `,` thousands separators (`1234567` → `1,234,567`).
///
/// Used for every coordinate and length that appears in a user-facing
/// message.
pub fn format_thousands(value: impl Into<i128>) -> String {
    let value = value.into();
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_ascii() {
        assert_eq!(truncate_str("hello world", 5), "hello");
    }

    #[test]
    fn truncate_no_op_when_short() {
        assert_eq!(truncate_str("hi", 10), "hi");
    }

    #[test]
    fn truncate_multibyte_boundary() {
        let s = "αβγ"; // 6 bytes: 2+2+2
        assert_eq!(truncate_str(s, 3), "α");
        assert_eq!(truncate_str(s, 4), "αβ");
    }

    #[test]
    fn thousands_small_numbers_unchanged() {
        assert_eq!(format_thousands(0u64), "0");
        assert_eq!(format_thousands(999u64), "999");
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(format_thousands(1000u64), "1,000");
        assert_eq!(format_thousands(2_000_000u64), "2,000,000");
        assert_eq!(format_thousands(250_000_001u64), "250,000,001");
    }

    #[test]
    fn thousands_negative() {
        assert_eq!(format_thousands(-1234i64), "-1,234");
    }
}
