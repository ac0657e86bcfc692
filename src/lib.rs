//! Pericope - scripture reference parsing and formatting
//!
//! This crate re-exports all layers of the pericope system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: pericope_parser     - Normalizer, splitter, clause grammar, resolver
//! Layer 1: pericope_canon      - Standard 66-book table and name variants
//! Layer 0: pericope_foundation - Core types (Book, Reference, Passage, Error)
//! ```

pub use pericope_canon as canon;
pub use pericope_foundation as foundation;
pub use pericope_parser as parser;

pub use pericope_foundation::{Error, ErrorKind, Passage, Reference, Result};
pub use pericope_parser::{ParserConfig, ReferenceParser};
