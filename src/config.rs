//! This module defines a reusable preset for the helpers that take options.
//!
//! A preset can be written in toml:
//!
//! ```toml
//! comparison = "ignore_case"
//! fallback = "untitled"
//! ```

use serde::{Deserialize, Serialize};

use crate::blank::non_blank;
use crate::comparison::Comparison;
use crate::suffix::trim_suffix_by;
use crate::Result;

/// Holds the options shared by a group of calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The comparison used when looking for suffixes.
    pub comparison: Comparison,

    /// The value returned in place of blank strings.
    pub fallback: Option<String>,
}

impl Config {
    /// Creates a config with the given comparison and no fallback.
    pub fn with_comparison(comparison: Comparison) -> Config {
        Config {
            comparison,
            fallback: None,
        }
    }

    /// Reads a config from toml. Missing keys take their default value.
    pub fn from_toml(content: &str) -> Result<Config> {
        let config: Config = toml::from_str(content)?;
        debug!(
            "loaded config with comparison {} and fallback {:?}",
            config.comparison, config.fallback
        );
        Ok(config)
    }

    /// Writes the config as toml.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Removes `suffix` from `text` using the configured comparison.
    pub fn trim_suffix<'a>(&self, text: &'a str, suffix: &str) -> &'a str {
        trim_suffix_by(text, suffix, self.comparison)
    }

    /// Returns `text` if it isn't blank, the configured fallback otherwise.
    pub fn non_blank<'a>(&'a self, text: Option<&'a str>) -> Option<&'a str> {
        non_blank(text, self.fallback.as_deref())
    }
}
