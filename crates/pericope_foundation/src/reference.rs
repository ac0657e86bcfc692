//! Validated points in scripture.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::Arc;

use crate::book::Book;
use crate::error::{Error, Result};

/// A sub-verse portion tag, as in "15a".
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Fragment {
    /// First portion.
    A,
    /// Second portion.
    B,
    /// Third portion.
    C,
}

impl Fragment {
    /// Maps a single letter, in either case, to a fragment.
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        match ch.to_ascii_lowercase() {
            'a' => Some(Self::A),
            'b' => Some(Self::B),
            'c' => Some(Self::C),
            _ => None,
        }
    }

    /// Lowercase letter for this fragment.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => "a",
            Self::B => "b",
            Self::C => "c",
        }
    }

    /// Parses optional fragment text; the empty string means no fragment.
    ///
    /// # Errors
    ///
    /// Returns `InvalidFragment` for anything but "", "a", "b" or "c".
    pub fn parse_optional(text: &str) -> Result<Option<Self>> {
        if text.is_empty() {
            Ok(None)
        } else {
            text.parse().map(Some)
        }
    }
}

impl FromStr for Fragment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Self::from_char(ch).ok_or_else(|| Error::invalid_fragment(s)),
            _ => Err(Error::invalid_fragment(s)),
        }
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved point in scripture.
///
/// A verse of 0 means "the whole chapter" and is only used for display.
#[derive(Clone, Debug)]
pub struct Reference {
    book: Arc<Book>,
    chapter: u32,
    verse: u32,
    fragment: Option<Fragment>,
}

impl Reference {
    /// Creates a reference after checking it against the book's structure.
    ///
    /// # Errors
    ///
    /// Returns `ChapterOutOfRange` if the chapter is not in the book, or
    /// `VerseOutOfRange` if a non-zero verse exceeds the chapter.
    pub fn new(
        book: Arc<Book>,
        chapter: u32,
        verse: u32,
        fragment: Option<Fragment>,
    ) -> Result<Self> {
        let verses = book.verses_in_chapter(chapter)?;
        if verse > verses {
            return Err(Error::verse_out_of_range(
                book.name(),
                chapter,
                verse,
                verses,
            ));
        }
        Ok(Self {
            book,
            chapter,
            verse,
            fragment,
        })
    }

    /// Like [`Reference::new`], taking the fragment as text.
    ///
    /// # Errors
    ///
    /// Additionally returns `InvalidFragment` for a fragment outside a, b, c.
    pub fn with_fragment_str(
        book: Arc<Book>,
        chapter: u32,
        verse: u32,
        fragment: &str,
    ) -> Result<Self> {
        let fragment = Fragment::parse_optional(fragment)?;
        Self::new(book, chapter, verse, fragment)
    }

    /// First verse of the book.
    #[must_use]
    pub fn start_of_book(book: Arc<Book>) -> Self {
        Self {
            book,
            chapter: 1,
            verse: 1,
            fragment: None,
        }
    }

    /// Final verse of the book.
    #[must_use]
    pub fn end_of_book(book: Arc<Book>) -> Self {
        let chapter = book.chapter_count();
        let verse = book.last_verse_of_book();
        Self {
            book,
            chapter,
            verse,
            fragment: None,
        }
    }

    /// The book this reference points into.
    #[must_use]
    pub fn book(&self) -> &Arc<Book> {
        &self.book
    }

    /// Chapter number.
    #[must_use]
    pub fn chapter(&self) -> u32 {
        self.chapter
    }

    /// Verse number, 0 for a whole chapter.
    #[must_use]
    pub fn verse(&self) -> u32 {
        self.verse
    }

    /// Sub-verse fragment, if any.
    #[must_use]
    pub fn fragment(&self) -> Option<Fragment> {
        self.fragment
    }

    /// Whether both references point into the same book.
    #[must_use]
    pub fn same_book(&self, other: &Self) -> bool {
        self.book.number() == other.book.number()
    }

    /// Whether this reference is the final verse of its chapter.
    #[must_use]
    pub fn is_last_verse_of_chapter(&self) -> bool {
        self.book
            .verses_in_chapter(self.chapter)
            .is_ok_and(|verses| verses == self.verse)
    }

    /// Integer key giving a total order across the whole canon.
    ///
    /// `book * 1_000_000 + chapter * 1_000 + verse`; [`Book::from_data`]
    /// keeps chapter and verse below 1000 so keys never collide.
    #[must_use]
    pub fn ordering_key(&self) -> u64 {
        u64::from(self.book.number()) * 1_000_000
            + u64::from(self.chapter) * 1_000
            + u64::from(self.verse)
    }

    /// `chapter:verse` plus fragment, without the book name.
    #[must_use]
    pub fn chapter_verse(&self) -> String {
        format!("{}:{}", self.chapter, self.verse_with_fragment())
    }

    /// Verse number plus fragment.
    #[must_use]
    pub fn verse_with_fragment(&self) -> String {
        match self.fragment {
            Some(fragment) => format!("{}{fragment}", self.verse),
            None => self.verse.to_string(),
        }
    }
}

impl PartialEq for Reference {
    fn eq(&self, other: &Self) -> bool {
        self.same_book(other)
            && self.chapter == other.chapter
            && self.verse == other.verse
            && self.fragment == other.fragment
    }
}

impl Eq for Reference {}

impl Hash for Reference {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.book.number().hash(state);
        self.chapter.hash(state);
        self.verse.hash(state);
        self.fragment.hash(state);
    }
}

impl PartialOrd for Reference {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Reference {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ordering_key()
            .cmp(&other.ordering_key())
            .then_with(|| self.fragment.cmp(&other.fragment))
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.verse == 0 {
            write!(f, "{} {}", self.book.name(), self.chapter)
        } else {
            write!(f, "{} {}", self.book.name(), self.chapter_verse())
        }
    }
}
