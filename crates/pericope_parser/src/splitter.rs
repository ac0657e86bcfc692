//! Clause splitting.
//!
//! Cuts normalized input into clauses on the configured separators. Word
//! separators such as "and" only split on whole words, so "Rand" or
//! "Handel" survive intact.

use regex::{Regex, escape};

use pericope_foundation::Result;

use crate::compile_pattern;
use crate::config::ParserConfig;

/// Splits input into trimmed, non-empty clauses.
#[derive(Clone, Debug)]
pub struct SeparatorSplitter {
    pattern: Regex,
}

impl SeparatorSplitter {
    /// Builds a splitter for the separators in `config`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the configuration is invalid, or
    /// `InvalidPattern` if the combined pattern fails to compile.
    pub fn new(config: &ParserConfig) -> Result<Self> {
        config.validate()?;

        let alternatives: Vec<String> = config
            .separators
            .iter()
            .map(|separator| {
                let separator = separator.trim();
                let escaped = escape(separator);
                if separator.chars().all(char::is_alphanumeric) {
                    format!(r"\b{escaped}\b")
                } else {
                    escaped
                }
            })
            .collect();

        let pattern = compile_pattern(&format!("(?i)(?:{})", alternatives.join("|")))?;
        Ok(Self { pattern })
    }

    /// Splits `text`, trimming each clause and dropping empty ones.
    #[must_use]
    pub fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.pattern
            .split(text)
            .map(str::trim)
            .filter(|clause| !clause.is_empty())
            .collect()
    }
}
