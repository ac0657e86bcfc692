//! Standard book table for pericope.
//!
//! Supplies the [`BookData`] records for the 66-book Protestant canon that
//! the parser's registry is built from. Callers with a different canon or
//! versification can build their own records instead.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod books;
pub mod variants;

use pericope_foundation::BookData;

pub use books::{BOOKS, CanonEntry};
pub use variants::numbered_variants;

/// Number of books in the standard canon.
pub const BOOK_COUNT: usize = 66;

impl CanonEntry {
    /// Converts the static row into an owned record, adding the generated
    /// spellings of numbered books.
    #[must_use]
    pub fn to_book_data(&self) -> BookData {
        let mut abbreviations: Vec<String> = Vec::new();
        let aliases = std::iter::once(self.name).chain(self.abbreviations.iter().copied());
        for alias in aliases {
            if alias != self.name {
                abbreviations.push(alias.to_string());
            }
            abbreviations.extend(numbered_variants(alias));
        }

        BookData {
            number: self.number,
            name: self.name.to_string(),
            singular_name: self.singular_name.to_string(),
            abbreviations,
            chapters: self.chapters.to_vec(),
        }
    }
}

/// Records for every book of the standard canon, in canonical order.
#[must_use]
pub fn standard_books() -> Vec<BookData> {
    BOOKS.iter().map(CanonEntry::to_book_data).collect()
}
