//! Core types for pericope.
//!
//! This crate provides:
//! - [`Book`] / [`BookData`] - Validated book structure and its source record
//! - [`Reference`] / [`Fragment`] - Bounds-checked points in scripture
//! - [`Passage`] - Inclusive ranges and their canonical rendering
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod book;
pub mod error;
pub mod passage;
pub mod reference;

pub use book::{Book, BookData, MAX_UNITS};
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use passage::Passage;
pub use reference::{Fragment, Reference};
