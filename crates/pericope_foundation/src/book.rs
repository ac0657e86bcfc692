//! Book descriptors and their loadable source records.

use std::fmt;

use crate::error::{Error, Result};

/// Upper bound (exclusive) on chapter counts and verse counts.
///
/// The reference ordering key packs chapter and verse into three decimal
/// digits each, so tables that exceed this are rejected on load.
pub const MAX_UNITS: u32 = 1_000;

/// Source record for one book, as supplied by an external table.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BookData {
    /// 1-based canonical position.
    pub number: u32,
    /// Canonical (plural where relevant) name, e.g. "Psalms".
    pub name: String,
    /// Name used when a single chapter is meant, e.g. "Psalm".
    pub singular_name: String,
    /// Accepted alternative spellings.
    #[cfg_attr(feature = "serde", serde(default))]
    pub abbreviations: Vec<String>,
    /// Verse count of each chapter; index 0 is chapter 1.
    pub chapters: Vec<u32>,
}

impl BookData {
    /// Creates a record with no abbreviations.
    #[must_use]
    pub fn new(
        number: u32,
        name: impl Into<String>,
        singular_name: impl Into<String>,
        chapters: Vec<u32>,
    ) -> Self {
        Self {
            number,
            name: name.into(),
            singular_name: singular_name.into(),
            abbreviations: Vec::new(),
            chapters,
        }
    }

    /// Builder method to set the accepted abbreviations.
    #[must_use]
    pub fn with_abbreviations<I, S>(mut self, abbreviations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.abbreviations = abbreviations.into_iter().map(Into::into).collect();
        self
    }
}

/// An immutable, validated book.
///
/// Chapters are contiguous `1..=chapter_count()` because they are stored as
/// a list indexed by `chapter - 1`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Book {
    number: u32,
    name: String,
    singular_name: String,
    abbreviations: Vec<String>,
    verses: Vec<u32>,
}

impl Book {
    /// Validates a source record and builds a book from it.
    ///
    /// # Errors
    ///
    /// Returns `InvalidBookData` if the number is zero, a name is blank, the
    /// book has no chapters, a chapter has no verses, or a count reaches
    /// [`MAX_UNITS`].
    pub fn from_data(data: BookData) -> Result<Self> {
        let BookData {
            number,
            name,
            singular_name,
            abbreviations,
            chapters,
        } = data;

        if number == 0 {
            return Err(Error::invalid_book_data(format!(
                "book {name:?} has number 0; numbers are 1-based"
            )));
        }
        if name.trim().is_empty() {
            return Err(Error::invalid_book_data(format!(
                "book #{number} has a blank name"
            )));
        }
        if chapters.is_empty() {
            return Err(Error::invalid_book_data(format!("{name} has no chapters")));
        }
        if chapters.len() >= MAX_UNITS as usize {
            return Err(Error::invalid_book_data(format!(
                "{name} has {} chapters; at most {} are supported",
                chapters.len(),
                MAX_UNITS - 1
            )));
        }
        for (index, &count) in chapters.iter().enumerate() {
            if count == 0 || count >= MAX_UNITS {
                return Err(Error::invalid_book_data(format!(
                    "{name} chapter {} has {count} verses; expected 1..{MAX_UNITS}",
                    index + 1
                )));
            }
        }

        let singular_name = if singular_name.trim().is_empty() {
            name.clone()
        } else {
            singular_name
        };

        Ok(Self {
            number,
            name,
            singular_name,
            abbreviations,
            verses: chapters,
        })
    }

    /// Canonical position in the whole canon.
    #[must_use]
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Canonical name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name used when exactly one chapter is meant.
    #[must_use]
    pub fn singular_name(&self) -> &str {
        &self.singular_name
    }

    /// Accepted abbreviations, as supplied.
    #[must_use]
    pub fn abbreviations(&self) -> &[String] {
        &self.abbreviations
    }

    /// Number of chapters.
    #[must_use]
    pub fn chapter_count(&self) -> u32 {
        // Bounded by MAX_UNITS in from_data.
        u32::try_from(self.verses.len()).unwrap_or(u32::MAX)
    }

    /// Whether `chapter` is part of this book.
    #[must_use]
    pub fn has_chapter(&self, chapter: u32) -> bool {
        chapter >= 1 && chapter <= self.chapter_count()
    }

    /// Verse count of `chapter`.
    ///
    /// # Errors
    ///
    /// Returns `ChapterOutOfRange` if the chapter does not exist.
    pub fn verses_in_chapter(&self, chapter: u32) -> Result<u32> {
        if !self.has_chapter(chapter) {
            return Err(Error::chapter_out_of_range(
                &self.name,
                chapter,
                self.chapter_count(),
            ));
        }
        Ok(self.verses[(chapter - 1) as usize])
    }

    /// Verse count of the final chapter.
    #[must_use]
    pub fn last_verse_of_book(&self) -> u32 {
        self.verses.last().copied().unwrap_or(0)
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
