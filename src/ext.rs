//! This module contains traits that expose the helpers as methods.

use crate::blank;
use crate::comparison::Comparison;
use crate::part::part;
use crate::repeat::repeat;
use crate::suffix::trim_suffix_by;

/// Method syntax for the helpers that work on a present string.
pub trait TextExt {
    /// See [`part`](crate::part::part).
    fn part(&self, start_index: isize, offset: Option<isize>) -> &str;

    /// See [`trim_suffix_by`](crate::suffix::trim_suffix_by).
    fn trim_suffix_by(&self, suffix: &str, comparison: Comparison) -> &str;

    /// See [`repeat`](crate::repeat::repeat).
    fn repeated(&self, times: isize) -> String;

    /// Checks whether the string is composed entirely of whitespace.
    fn is_blank(&self) -> bool;

    /// Checks that the string holds at least one non whitespace char.
    fn not_blank(&self) -> bool {
        !self.is_blank()
    }
}

impl TextExt for str {
    fn part(&self, start_index: isize, offset: Option<isize>) -> &str {
        part(self, start_index, offset)
    }

    fn trim_suffix_by(&self, suffix: &str, comparison: Comparison) -> &str {
        trim_suffix_by(self, suffix, comparison)
    }

    fn repeated(&self, times: isize) -> String {
        repeat(self, times)
    }

    fn is_blank(&self) -> bool {
        blank::is_blank(Some(self))
    }
}

/// Method syntax for the helpers that work on a string that may be absent.
pub trait OptionalText {
    /// Borrows the string, if any.
    fn as_text(&self) -> Option<&str>;

    /// Returns the string, or the empty string if it is absent.
    fn text(&self) -> &str {
        blank::text_or_empty(self.as_text())
    }

    /// Checks whether the string is absent or composed entirely of whitespace.
    fn is_blank(&self) -> bool {
        blank::is_blank(self.as_text())
    }

    /// Checks that the string is present and not blank.
    fn not_blank(&self) -> bool {
        blank::not_blank(self.as_text())
    }

    /// Returns the string if it isn't blank, `if_blank` otherwise.
    fn non_blank<'a>(&'a self, if_blank: Option<&'a str>) -> Option<&'a str> {
        blank::non_blank(self.as_text(), if_blank)
    }
}

impl<'s> OptionalText for Option<&'s str> {
    fn as_text(&self) -> Option<&str> {
        *self
    }
}

impl OptionalText for Option<String> {
    fn as_text(&self) -> Option<&str> {
        self.as_deref()
    }
}
