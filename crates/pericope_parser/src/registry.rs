//! Book registry.
//!
//! Indexes every book by number, canonical name, singular name and
//! abbreviation. Built once and never mutated.

use std::collections::HashMap;
use std::sync::Arc;

use pericope_foundation::{Book, BookData, Error, Result};

/// Normalizes a name for lookup: lowercases, drops every character outside
/// `[a-z0-9 ]`, and collapses whitespace runs to one space.
#[must_use]
pub fn standardise(name: &str) -> String {
    let kept: String = name
        .to_lowercase()
        .chars()
        .filter(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch.is_whitespace())
        .collect();
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Immutable index of books.
#[derive(Clone, Debug, Default)]
pub struct BookRegistry {
    /// Books in canonical order
    books: Vec<Arc<Book>>,
    /// Book number -> position in `books`
    by_number: HashMap<u32, usize>,
    /// Standardised alias -> position in `books`
    aliases: HashMap<String, usize>,
}

impl BookRegistry {
    /// Builds a registry from source records.
    ///
    /// # Errors
    ///
    /// Returns `InvalidBookData` if a record is invalid, two records share a
    /// number, or two books claim the same alias.
    pub fn from_data(data: impl IntoIterator<Item = BookData>) -> Result<Self> {
        let books = data
            .into_iter()
            .map(Book::from_data)
            .collect::<Result<Vec<_>>>()?;
        Self::from_books(books)
    }

    /// Builds a registry from already validated books.
    ///
    /// # Errors
    ///
    /// Returns `InvalidBookData` on duplicate numbers or conflicting aliases.
    pub fn from_books(books: impl IntoIterator<Item = Book>) -> Result<Self> {
        let mut books: Vec<Arc<Book>> = books.into_iter().map(Arc::new).collect();
        books.sort_by_key(|book| book.number());

        let mut by_number = HashMap::with_capacity(books.len());
        let mut aliases = HashMap::new();

        for (index, book) in books.iter().enumerate() {
            if by_number.insert(book.number(), index).is_some() {
                return Err(Error::invalid_book_data(format!(
                    "book number {} is used more than once",
                    book.number()
                )));
            }

            let names = [book.name(), book.singular_name()]
                .into_iter()
                .chain(book.abbreviations().iter().map(String::as_str));
            for name in names {
                let key = standardise(name);
                if key.trim().is_empty() {
                    continue;
                }
                if let Some(&existing) = aliases.get(&key) {
                    if existing != index {
                        let other: &Arc<Book> = &books[existing];
                        return Err(Error::invalid_book_data(format!(
                            "{name:?} names both {} and {}",
                            other.name(),
                            book.name()
                        )));
                    }
                }
                aliases.insert(key, index);
            }
        }

        Ok(Self {
            books,
            by_number,
            aliases,
        })
    }

    /// Builds a registry over the standard 66-book canon.
    ///
    /// # Errors
    ///
    /// Only fails if the bundled table is inconsistent.
    pub fn standard() -> Result<Self> {
        Self::from_data(pericope_canon::standard_books())
    }

    /// Looks up a book by name or abbreviation, ignoring case and
    /// punctuation.
    ///
    /// # Errors
    ///
    /// Returns `UnknownBook` if nothing matches.
    pub fn lookup(&self, name: &str) -> Result<Arc<Book>> {
        self.aliases
            .get(&standardise(name))
            .map(|&index| Arc::clone(&self.books[index]))
            .ok_or_else(|| Error::unknown_book(name.trim()))
    }

    /// Looks up a book by canonical number.
    #[must_use]
    pub fn book(&self, number: u32) -> Option<Arc<Book>> {
        self.by_number
            .get(&number)
            .map(|&index| Arc::clone(&self.books[index]))
    }

    /// Iterates over all books in canonical order.
    pub fn books(&self) -> impl Iterator<Item = &Arc<Book>> {
        self.books.iter()
    }

    /// Number of chapters in `book`.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn chapters_in_book(&self, book: &Book) -> u32 {
        book.chapter_count()
    }

    /// Number of verses in a chapter of `book`.
    ///
    /// # Errors
    ///
    /// Returns `ChapterOutOfRange` if the chapter does not exist.
    #[allow(clippy::unused_self)]
    pub fn verses_in_chapter(&self, book: &Book, chapter: u32) -> Result<u32> {
        book.verses_in_chapter(chapter)
    }

    /// Number of books.
    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Whether the registry holds no books.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
