//! This module defines the rules used to compare strings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// How two strings are compared.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    /// Chars must be exactly equal.
    Ordinal,

    /// ASCII letters match regardless of their case, other chars must be equal.
    IgnoreAsciiCase,

    /// Chars match if their Unicode lowercase mappings are equal.
    IgnoreCase,
}

impl Default for Comparison {
    fn default() -> Comparison {
        Comparison::Ordinal
    }
}

impl Comparison {
    /// Returns the name of the comparison, as accepted by `from_str`.
    pub fn name(self) -> &'static str {
        match self {
            Comparison::Ordinal => "ordinal",
            Comparison::IgnoreAsciiCase => "ignore_ascii_case",
            Comparison::IgnoreCase => "ignore_case",
        }
    }

    /// Checks whether two chars match under this comparison.
    pub fn chars_match(self, a: char, b: char) -> bool {
        match self {
            Comparison::Ordinal => a == b,
            Comparison::IgnoreAsciiCase => a.eq_ignore_ascii_case(&b),
            Comparison::IgnoreCase => a == b || a.to_lowercase().eq(b.to_lowercase()),
        }
    }

    /// Checks whether `text` ends with `suffix` under this comparison.
    ///
    /// The last `suffix.chars().count()` chars of `text` are compared one by
    /// one with the chars of `suffix`.
    pub fn ends_with(self, text: &str, suffix: &str) -> bool {
        if self == Comparison::Ordinal {
            return text.ends_with(suffix);
        }

        let mut text_chars = text.chars().rev();

        for expected in suffix.chars().rev() {
            match text_chars.next() {
                Some(actual) if self.chars_match(actual, expected) => (),
                _ => return false,
            }
        }

        true
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}", self.name())
    }
}

impl FromStr for Comparison {
    type Err = Error;

    fn from_str(name: &str) -> Result<Comparison, Error> {
        match name.trim().to_ascii_lowercase().as_str() {
            "ordinal" => Ok(Comparison::Ordinal),
            "ignore_ascii_case" => Ok(Comparison::IgnoreAsciiCase),
            "ignore_case" => Ok(Comparison::IgnoreCase),
            _ => Err(Error::UnknownComparison(name.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use crate::comparison::Comparison;
    use crate::Error;

    #[test_case(Comparison::Ordinal, "file.MD", ".md", false ; "ordinal is case sensitive")]
    #[test_case(Comparison::Ordinal, "file.md", ".md", true ; "ordinal exact")]
    #[test_case(Comparison::IgnoreAsciiCase, "file.MD", ".md", true ; "ascii case ignored")]
    #[test_case(Comparison::IgnoreAsciiCase, "STRASSE.É", ".é", false ; "non ascii case kept")]
    #[test_case(Comparison::IgnoreCase, "STRASSE.É", ".é", true ; "unicode case ignored")]
    #[test_case(Comparison::IgnoreCase, "md", ".md", false ; "suffix longer than text")]
    #[test_case(Comparison::IgnoreCase, "anything", "", true ; "empty suffix")]
    fn ends_with(comparison: Comparison, text: &str, suffix: &str, expected: bool) {
        assert_eq!(comparison.ends_with(text, suffix), expected);
    }

    #[test_case("ordinal", Comparison::Ordinal ; "ordinal")]
    #[test_case("Ignore_Ascii_Case", Comparison::IgnoreAsciiCase ; "mixed case name")]
    #[test_case(" ignore_case ", Comparison::IgnoreCase ; "surrounding whitespace")]
    fn parses_names(name: &str, expected: Comparison) {
        assert_eq!(name.parse::<Comparison>().unwrap(), expected);
    }

    #[test]
    fn rejects_unknown_names() {
        match "culture".parse::<Comparison>() {
            Err(Error::UnknownComparison(name)) => assert_eq!(name, "culture"),
            other => panic!("expected an unknown comparison, got {:?}", other),
        }
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for comparison in &[
            Comparison::Ordinal,
            Comparison::IgnoreAsciiCase,
            Comparison::IgnoreCase,
        ] {
            let parsed: Comparison = comparison.to_string().parse().unwrap();
            assert_eq!(parsed, *comparison);
        }
    }

    #[test]
    fn defaults_to_ordinal() {
        assert_eq!(Comparison::default(), Comparison::Ordinal);
    }
}
