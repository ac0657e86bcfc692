//! Free-text scripture reference parser.
//!
//! This crate turns human-written references like "1 John 5:4-17, 19-21 &
//! Esther 2" into validated [`Passage`](pericope_foundation::Passage) values.
//!
//! # Architecture
//!
//! ```text
//! "John ch3v16-18 and 4"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   NORMALIZER    │  → "John ch 3 v 16-18 and 4"
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   SPLITTER      │  → ["John ch 3 v 16-18", "4"]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ CLAUSE          │  → { book: "john", numeric: 3, verse: 16 } - { numeric: 18 }
//! │ GRAMMAR         │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ RESOLVER        │  → John 3:16 - John 3:18, then John 4:1 - John 4:54
//! │ (+ registry)    │
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Separator configuration
//! - [`registry`] - Book lookup by name and abbreviation
//! - [`normalizer`] - Rewrites surface spellings into the grammar's separators
//! - [`splitter`] - Cuts input into clauses
//! - [`clause`] - Structural grammar for one clause
//! - [`resolver`] - Carried-state resolution of clauses into passages
//! - [`parser`] - Main parser pipeline orchestration

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod clause;
pub mod config;
pub mod normalizer;
pub mod parser;
pub mod registry;
pub mod resolver;
pub mod splitter;

use regex::Regex;

use pericope_foundation::{Error, Result};

// Re-export main types for convenience
pub use clause::{ClauseFields, ClauseGrammar, Numeric, Token};
pub use config::{DEFAULT_SEPARATORS, ParserConfig};
pub use normalizer::TextNormalizer;
pub use parser::ReferenceParser;
pub use registry::BookRegistry;
pub use resolver::ParseState;
pub use splitter::SeparatorSplitter;

/// Compiles a pattern, reporting failures as `InvalidPattern`.
pub(crate) fn compile_pattern(source: &str) -> Result<Regex> {
    Regex::new(source).map_err(|err| Error::invalid_pattern(err.to_string()))
}
