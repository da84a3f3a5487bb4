//! This module contains helpers for optional and blank strings.
//!
//! A string is blank if it is absent, empty, or made only of whitespace.

/// Checks whether a string is absent or composed entirely of whitespace.
pub fn is_blank(value: Option<&str>) -> bool {
    match value {
        Some(text) => text.chars().all(char::is_whitespace),
        None => true,
    }
}

/// Checks that a string is present and holds at least one non whitespace char.
pub fn not_blank(value: Option<&str>) -> bool {
    !is_blank(value)
}

/// Returns `text` if it isn't blank, or `if_blank` otherwise.
///
/// ```
/// use simpler_text::non_blank;
///
/// assert_eq!(non_blank(Some("  "), Some("fallback")), Some("fallback"));
/// assert_eq!(non_blank(None, None), None);
/// ```
pub fn non_blank<'a>(text: Option<&'a str>, if_blank: Option<&'a str>) -> Option<&'a str> {
    if is_blank(text) {
        if_blank
    } else {
        text
    }
}

/// Returns the string if it is present, the empty string otherwise.
pub fn text_or_empty(text: Option<&str>) -> &str {
    text.unwrap_or("")
}
