//! This crate contains small helpers that make working with strings less painful.
//!
//! Every text function is total: out-of-range indices, empty strings and absent
//! values all produce a defined result instead of a panic.

#![warn(missing_docs)]

#[macro_use]
extern crate log;

pub mod blank;
pub mod comparison;
pub mod config;
pub mod ext;
pub mod part;
pub mod repeat;
pub mod suffix;

#[cfg(test)]
mod tests;

use std::{error, fmt, result};

pub use blank::{is_blank, non_blank, not_blank, text_or_empty};
pub use comparison::Comparison;
pub use config::Config;
pub use ext::{OptionalText, TextExt};
pub use part::part;
pub use repeat::repeat;
pub use suffix::{trim_suffix, trim_suffix_by};

macro_rules! impl_from_error {
    ($type: ty, $variant: path, $from: ty) => {
        impl From<$from> for $type {
            fn from(e: $from) -> $type {
                $variant(e)
            }
        }
    };
}

/// The error type of the library.
#[derive(Debug)]
pub enum Error {
    /// The name does not match any comparison mode.
    UnknownComparison(String),

    /// The configuration could not be read from toml.
    TomlError(toml::de::Error),

    /// The configuration could not be written to toml.
    TomlSerError(toml::ser::Error),
}

impl_from_error!(Error, Error::TomlError, toml::de::Error);
impl_from_error!(Error, Error::TomlSerError, toml::ser::Error);

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::UnknownComparison(name) => write!(fmt, "unknown comparison \"{}\"", name),
            Error::TomlError(e) => write!(fmt, "cannot read config: {}", e),
            Error::TomlSerError(e) => write!(fmt, "cannot write config: {}", e),
        }
    }
}

impl error::Error for Error {}

/// The result type of the library.
pub type Result<T> = result::Result<T, Error>;
