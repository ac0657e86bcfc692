//! Configuration for the reference parser.

use pericope_foundation::{Error, Result};

/// Separators used when none are configured.
pub const DEFAULT_SEPARATORS: [&str; 4] = ["&", ",", ";", "and"];

/// Configuration for the reference parser.
///
/// Controls how an input string is cut into clauses.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParserConfig {
    /// Clause separators. All of them split equally; the first is the
    /// canonical one.
    pub separators: Vec<String>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            separators: DEFAULT_SEPARATORS.iter().map(ToString::to_string).collect(),
        }
    }
}

impl ParserConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration that only splits on punctuation, leaving
    /// words such as "and" inside clauses.
    #[must_use]
    pub fn punctuation_only() -> Self {
        Self {
            separators: vec!["&".to_string(), ",".to_string(), ";".to_string()],
        }
    }

    /// Builder method to replace the separator list.
    #[must_use]
    pub fn with_separators<I, S>(mut self, separators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.separators = separators.into_iter().map(Into::into).collect();
        self
    }

    /// Builder method to add one more separator.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separators.push(separator.into());
        self
    }

    /// Checks that the configuration can be used to build a parser.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if there are no separators, a separator is
    /// blank, or a separator contains the range dash.
    pub fn validate(&self) -> Result<()> {
        if self.separators.is_empty() {
            return Err(Error::invalid_config("at least one separator is required"));
        }
        for separator in &self.separators {
            if separator.trim().is_empty() {
                return Err(Error::invalid_config("separators must not be blank"));
            }
            if separator.contains('-') {
                return Err(Error::invalid_config(format!(
                    "separator {separator:?} would collide with range dashes"
                )));
            }
        }
        Ok(())
    }
}
