//! Input normalization.
//!
//! Rewrites the many surface spellings of a reference ("chapter3verse16",
//! "John c3v16", "3:1 to 4:12", en and em dashes) into the small set of
//! separators the clause grammar understands. Rewrites run in a fixed order
//! over the whole input, before it is split into clauses.

use regex::Regex;

use pericope_foundation::Result;

use crate::compile_pattern;

/// One ordered rewrite.
#[derive(Clone, Debug)]
struct Rewrite {
    pattern: Regex,
    replacement: &'static str,
}

/// The rewrite table: pattern source and replacement, applied top to bottom.
const REWRITES: [(&str, &str); 8] = [
    // "chapter3" -> "chapter 3"
    (r"(?i)([a-z])([0-9])", "${1} ${2}"),
    // "3verse" -> "3 verse", keeping fragments such as "15a" together
    (r"(?i)([0-9])([d-z])", "${1} ${2}"),
    ("[\u{2013}\u{2014}]", "-"),
    // "3:1 to 4:12" -> "3:1-4:12"
    (r"(?i)[^a-z]to[^a-z]", "-"),
    (r"(?i)([^a-z])chapter([^a-z])", "${1}ch${2}"),
    // a lone "c" means chapter, unless it is the fragment in "16c"
    (r"(?i)([^a-z0-9])c([^a-z])", "${1}ch${2}"),
    (r"(?i)([^a-z])verses?([^a-z])", "${1} v ${2}"),
    // "1Cor" at a clause or range start -> " 1 Cor"; "-5a" is left alone
    (r"(?i)(^|;\s*|-)([0-9])([a-z]{2})", "${1} ${2} ${3}"),
];

/// Applies the rewrite table to raw input.
#[derive(Clone, Debug)]
pub struct TextNormalizer {
    rewrites: Vec<Rewrite>,
}

impl TextNormalizer {
    /// Compiles the rewrite table.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPattern` if a pattern fails to compile.
    pub fn new() -> Result<Self> {
        let rewrites = REWRITES
            .iter()
            .map(|&(source, replacement)| {
                Ok(Rewrite {
                    pattern: compile_pattern(source)?,
                    replacement,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rewrites })
    }

    /// Rewrites `text` into its normalized form.
    #[must_use]
    pub fn normalize(&self, text: &str) -> String {
        let mut normalized = text.to_string();
        for rewrite in &self.rewrites {
            let replaced = rewrite
                .pattern
                .replace_all(&normalized, rewrite.replacement)
                .into_owned();
            normalized = replaced;
        }
        normalized
    }
}
