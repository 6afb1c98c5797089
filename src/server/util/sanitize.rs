//! Normalization of raw form input before it reaches storage.
//!
//! Form fields arrive as untyped text. Every function here is total: input that is absent
//! or not text yields an empty value instead of an error.

/// Trims surrounding whitespace and caps the result at `max_length` characters.
///
/// Truncation counts characters, not bytes, so multi-byte input such as accented names is
/// never split inside a code point.
///
/// # Arguments
/// - `value` - Raw field value, `None` when the field is absent or not text
/// - `max_length` - Maximum number of characters kept
///
/// # Returns
/// - `String` - Trimmed and truncated text, empty for absent input
pub fn sanitize_text(value: Option<&str>, max_length: usize) -> String {
    match value {
        Some(text) => text.trim().chars().take(max_length).collect(),
        None => String::new(),
    }
}

/// Keeps only ASCII digits and caps the result at `max_length` digits.
///
/// Used for phone numbers and student numbers, which users type with spaces, dots,
/// parentheses and country-code prefixes.
///
/// # Arguments
/// - `value` - Raw field value, `None` when the field is absent or not text
/// - `max_length` - Maximum number of digits kept
///
/// # Returns
/// - `String` - Digits in input order, empty for absent input
pub fn sanitize_digits(value: Option<&str>, max_length: usize) -> String {
    match value {
        Some(text) => text
            .chars()
            .filter(char::is_ascii_digit)
            .take(max_length)
            .collect(),
        None => String::new(),
    }
}

/// Parses a year typed into a form.
///
/// # Returns
/// - `Some(i32)` - The trimmed input is a decimal integer
/// - `None` - Absent, empty, or not a number
pub fn parse_year(value: Option<&str>) -> Option<i32> {
    value.and_then(|text| text.trim().parse().ok())
}
