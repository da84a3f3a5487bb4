//! This module contains the substring extractor.
//!
//! Indices count chars rather than bytes, so the returned slice always lies on
//! char boundaries.

use std::iter;

/// Returns a part of a string.
///
/// A more forgiving version of slicing that supports offsets from the end of
/// the string and never panics when the requested range runs past the text.
///
/// - `start_index`: if positive, the zero-based char position where the part
///   begins. If negative, the number of chars counted back from the end.
/// - `offset`: if positive, the maximum number of chars in the part. If zero or
///   negative, the number of chars to discard from the end of the string. If
///   `None`, everything from `start_index` to the end is kept.
///
/// ```
/// use simpler_text::part;
///
/// assert_eq!(part("LastOne", -3, None), "One");
/// assert_eq!(part("TrickOrTreat", -7, Some(-5)), "Or");
/// ```
pub fn part(text: &str, start_index: isize, offset: Option<isize>) -> &str {
    let len = char_len(text);

    let start = if start_index < 0 {
        len.saturating_add(start_index)
    } else {
        start_index
    };

    // Counting back past the beginning starts at the beginning.
    let start = if start < 0 {
        trace!("start index {} is before the beginning of {:?}", start_index, text);
        0
    } else {
        start
    };

    if start >= len {
        return "";
    }

    let mut length = offset.unwrap_or(len);
    if length < 1 {
        length = len.saturating_add(length).saturating_sub(start);
    }
    let length = length.min(len - start);

    if length <= 0 {
        trace!("offset {:?} leaves nothing of {:?}", offset, text);
        return "";
    }

    slice_chars(text, start as usize, length as usize)
}

/// Number of chars in the text.
fn char_len(text: &str) -> isize {
    if text.is_ascii() {
        text.len() as isize
    } else {
        text.chars().count() as isize
    }
}

/// Slices `length` chars starting at char `start`.
///
/// The caller guarantees `length >= 1` and `start + length <= char_len(text)`.
fn slice_chars(text: &str, start: usize, length: usize) -> &str {
    if text.is_ascii() {
        return &text[start..start + length];
    }

    let mut boundaries = text
        .char_indices()
        .map(|(byte, _)| byte)
        .chain(iter::once(text.len()));

    let begin = boundaries.nth(start).unwrap_or_else(|| text.len());
    let end = boundaries.nth(length - 1).unwrap_or_else(|| text.len());

    &text[begin..end]
}
