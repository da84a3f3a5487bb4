//! This module contains the functions that remove suffixes.

use crate::comparison::Comparison;
use crate::part::part;

/// Removes `suffix` from the end of `text` if it is there, comparing chars
/// exactly.
///
/// ```
/// use simpler_text::trim_suffix;
///
/// assert_eq!(trim_suffix("markdown.md", ".md"), "markdown");
/// assert_eq!(trim_suffix("markdown.txt", ".md"), "markdown.txt");
/// ```
pub fn trim_suffix<'a>(text: &'a str, suffix: &str) -> &'a str {
    trim_suffix_by(text, suffix, Comparison::Ordinal)
}

/// Removes `suffix` from the end of `text` if `text` ends with it under the
/// given comparison.
///
/// Exactly as many chars as `suffix` holds are dropped, whatever the case of
/// the matching chars in `text`.
pub fn trim_suffix_by<'a>(text: &'a str, suffix: &str, comparison: Comparison) -> &'a str {
    if !comparison.ends_with(text, suffix) {
        return text;
    }

    let suffix_len = suffix.chars().count() as isize;
    part(text, 0, Some(-suffix_len))
}
