//! Inclusive reference ranges and their canonical rendering.

use std::fmt;

use crate::error::{Error, Result};
use crate::reference::Reference;

/// An inclusive range of scripture from one reference to another.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Passage {
    /// First reference in the range.
    pub from: Reference,
    /// Last reference in the range.
    pub to: Reference,
}

impl Passage {
    /// Creates a passage, rejecting ranges whose end sorts before the start.
    ///
    /// # Errors
    ///
    /// Returns `InvertedRange` if `to` has a smaller ordering key than `from`.
    pub fn new(from: Reference, to: Reference) -> Result<Self> {
        if from.ordering_key() > to.ordering_key() {
            return Err(Error::inverted_range(from.to_string(), to.to_string()));
        }
        Ok(Self { from, to })
    }

    /// A passage covering a single reference.
    #[must_use]
    pub fn single(reference: Reference) -> Self {
        Self {
            from: reference.clone(),
            to: reference,
        }
    }

    /// Whether the passage spans exactly one chapter of one book.
    #[must_use]
    pub fn is_single_chapter(&self) -> bool {
        self.from.same_book(&self.to) && self.from.chapter() == self.to.chapter()
    }

    /// Renders the passage in its canonical textual form.
    #[must_use]
    pub fn format(&self) -> String {
        let from = &self.from;
        let to = &self.to;
        let book = from.book();
        let no_fragments = from.fragment().is_none() && to.fragment().is_none();

        // "John"
        if from.same_book(to)
            && no_fragments
            && from.chapter() == 1
            && from.verse() == 1
            && to.chapter() == book.chapter_count()
            && to.is_last_verse_of_chapter()
        {
            return book.name().to_string();
        }

        // "Psalm 34"
        if self.is_single_chapter()
            && no_fragments
            && (from.verse() == 0 || (from.verse() == 1 && to.is_last_verse_of_chapter()))
        {
            return format!("{} {}", book.singular_name(), from.chapter());
        }

        // "John 3:16"
        if self.is_single_chapter()
            && from.verse() == to.verse()
            && from.fragment() == to.fragment()
        {
            return format!("{} {}", book.singular_name(), from.chapter_verse());
        }

        // "John 3:16-18"
        if self.is_single_chapter() {
            return format!(
                "{} {}-{}",
                book.singular_name(),
                from.chapter_verse(),
                to.verse_with_fragment()
            );
        }

        // "Genesis 1:1 - Exodus 5:2"
        if !from.same_book(to) {
            return format!(
                "{} {} - {} {}",
                book.name(),
                from.chapter_verse(),
                to.book().name(),
                to.chapter_verse()
            );
        }

        // "Psalms 120-134"
        if no_fragments && from.verse() == 1 && to.is_last_verse_of_chapter() {
            return format!("{} {}-{}", book.name(), from.chapter(), to.chapter());
        }

        format!(
            "{} {}-{}",
            book.singular_name(),
            from.chapter_verse(),
            to.chapter_verse()
        )
    }
}

impl fmt::Display for Passage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}
