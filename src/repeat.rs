//! This module contains the function that repeats strings.

/// Repeats a string a number of times.
///
/// Returns an empty string if `times` is less than one. The size of the result
/// is not bounded, so huge values of `times` are the caller's concern.
pub fn repeat(text: &str, times: isize) -> String {
    if times < 1 {
        return String::new();
    }

    text.repeat(times as usize)
}
