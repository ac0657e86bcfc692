//! Main parser pipeline.
//!
//! Orchestrates the full flow from free text to validated passages.

use std::sync::Arc;

use pericope_foundation::{Error, ErrorContext, Passage, Result};

use crate::clause::ClauseGrammar;
use crate::config::ParserConfig;
use crate::normalizer::TextNormalizer;
use crate::registry::BookRegistry;
use crate::resolver::{ParseState, resolve_clause};
use crate::splitter::SeparatorSplitter;

/// Parses free-text scripture references into passages.
///
/// Immutable once built, so one parser can serve any number of threads.
///
/// # Example
///
/// ```
/// use pericope_parser::ReferenceParser;
///
/// let parser = ReferenceParser::standard().unwrap();
/// let passages = parser.parse("1 John 5:4-17, 19-21 & Esther 2").unwrap();
/// let formatted: Vec<String> = passages.iter().map(ToString::to_string).collect();
/// assert_eq!(formatted, ["1 John 5:4-17", "1 John 5:19-21", "Esther 2"]);
/// ```
#[derive(Clone, Debug)]
pub struct ReferenceParser {
    registry: Arc<BookRegistry>,
    normalizer: TextNormalizer,
    splitter: SeparatorSplitter,
    grammar: ClauseGrammar,
}

impl ReferenceParser {
    /// Creates a parser over `registry` with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` for an unusable configuration, or
    /// `InvalidPattern` if an internal pattern fails to compile.
    pub fn new(registry: impl Into<Arc<BookRegistry>>, config: &ParserConfig) -> Result<Self> {
        Ok(Self {
            registry: registry.into(),
            normalizer: TextNormalizer::new()?,
            splitter: SeparatorSplitter::new(config)?,
            grammar: ClauseGrammar::new()?,
        })
    }

    /// Creates a parser over the standard canon with default separators.
    ///
    /// # Errors
    ///
    /// Only fails if the bundled book table is inconsistent.
    pub fn standard() -> Result<Self> {
        Self::new(BookRegistry::standard()?, &ParserConfig::default())
    }

    /// The registry this parser resolves books against.
    #[must_use]
    pub fn registry(&self) -> &BookRegistry {
        &self.registry
    }

    /// Parses `text` into one passage per clause, in input order.
    ///
    /// Parsing is all or nothing: the first bad clause fails the whole call,
    /// and the error carries the input and the offending clause.
    ///
    /// # Errors
    ///
    /// Returns `EmptyInput` for blank text, or the first clause error.
    pub fn parse(&self, text: &str) -> Result<Vec<Passage>> {
        if text.trim().is_empty() {
            return Err(Error::empty_input());
        }

        let normalized = self.normalizer.normalize(text);
        tracing::debug!(input = text, %normalized, "normalized reference input");

        let clauses = self.splitter.split(&normalized);
        if clauses.is_empty() {
            return Err(Error::empty_input().with_context(ErrorContext::new().with_input(text)));
        }

        let mut state = ParseState::new();
        let mut passages = Vec::with_capacity(clauses.len());
        for (index, clause) in clauses.into_iter().enumerate() {
            let (passage, next) = self.parse_clause(state, clause).map_err(|err| {
                err.with_context(
                    ErrorContext::new()
                        .with_input(text)
                        .with_clause(index, clause),
                )
            })?;
            tracing::debug!(clause, %passage, "resolved clause");
            passages.push(passage);
            state = next;
        }

        Ok(passages)
    }

    fn parse_clause(&self, state: ParseState, clause: &str) -> Result<(Passage, ParseState)> {
        let (start, end) = ClauseGrammar::split_range(clause)?;
        let start = self.grammar.parse_half(start)?;
        let end = end.map(|end| self.grammar.parse_half(end)).transpose()?;
        tracing::trace!(?start, ?end, "clause fields");

        resolve_clause(&self.registry, state, &start, end.as_ref())
    }
}
