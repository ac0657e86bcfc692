//! Error types for the pericope system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

/// Result type used throughout pericope.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for pericope operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an empty input error.
    #[must_use]
    pub fn empty_input() -> Self {
        Self::new(ErrorKind::EmptyInput)
    }

    /// Creates a malformed range error for a clause with too many dashes.
    #[must_use]
    pub fn malformed_range(clause: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedRange {
            clause: clause.into(),
        })
    }

    /// Creates an unparsable clause error.
    #[must_use]
    pub fn unparsable_clause(text: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnparsableClause { text: text.into() })
    }

    /// Creates an unknown book error.
    #[must_use]
    pub fn unknown_book(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownBook { name: name.into() })
    }

    /// Creates a chapter out of range error.
    #[must_use]
    pub fn chapter_out_of_range(book: impl Into<String>, chapter: u32, chapters: u32) -> Self {
        Self::new(ErrorKind::ChapterOutOfRange {
            book: book.into(),
            chapter,
            chapters,
        })
    }

    /// Creates a verse out of range error.
    #[must_use]
    pub fn verse_out_of_range(
        book: impl Into<String>,
        chapter: u32,
        verse: u32,
        verses: u32,
    ) -> Self {
        Self::new(ErrorKind::VerseOutOfRange {
            book: book.into(),
            chapter,
            verse,
            verses,
        })
    }

    /// Creates an invalid fragment error.
    #[must_use]
    pub fn invalid_fragment(fragment: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidFragment {
            fragment: fragment.into(),
        })
    }

    /// Creates an inverted range error from the rendered endpoints.
    #[must_use]
    pub fn inverted_range(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvertedRange {
            from: from.into(),
            to: to.into(),
        })
    }

    /// Creates an invalid book data error.
    #[must_use]
    pub fn invalid_book_data(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidBookData {
            message: message.into(),
        })
    }

    /// Creates an invalid configuration error.
    #[must_use]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidConfig {
            message: message.into(),
        })
    }

    /// Creates an invalid pattern error.
    #[must_use]
    pub fn invalid_pattern(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidPattern {
            message: message.into(),
        })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// Input was blank or whitespace-only.
    #[error("unable to parse an empty reference")]
    EmptyInput,

    /// A clause contains more than one range dash.
    #[error("range is too complex: {clause:?}")]
    MalformedRange {
        /// The offending clause.
        clause: String,
    },

    /// The structural grammar did not match.
    #[error("unable to parse reference {text:?}")]
    UnparsableClause {
        /// The text that failed to match.
        text: String,
    },

    /// No book has this name or abbreviation.
    #[error("invalid book name {name:?}")]
    UnknownBook {
        /// The name as written by the caller.
        name: String,
    },

    /// The requested chapter is not part of the book.
    #[error("chapter {chapter} does not exist in {book} ({chapters} chapters)")]
    ChapterOutOfRange {
        /// Canonical book name.
        book: String,
        /// The requested chapter.
        chapter: u32,
        /// Number of chapters in the book.
        chapters: u32,
    },

    /// The requested verse is not part of the chapter.
    #[error("verse {verse} does not exist in chapter {chapter} of {book} ({verses} verses)")]
    VerseOutOfRange {
        /// Canonical book name.
        book: String,
        /// The chapter that was addressed.
        chapter: u32,
        /// The requested verse.
        verse: u32,
        /// Number of verses in the chapter.
        verses: u32,
    },

    /// Fragment letter outside `a`, `b`, `c`.
    #[error("invalid fragment {fragment:?}")]
    InvalidFragment {
        /// The rejected fragment text.
        fragment: String,
    },

    /// The end of a range precedes its beginning.
    #[error("reference end {to} is before beginning {from}")]
    InvertedRange {
        /// Rendered start reference.
        from: String,
        /// Rendered end reference.
        to: String,
    },

    /// The supplied book table violates a structural invariant.
    #[error("invalid book data: {message}")]
    InvalidBookData {
        /// Description of the violation.
        message: String,
    },

    /// Parser configuration is unusable.
    #[error("invalid configuration: {message}")]
    InvalidConfig {
        /// Description of the problem.
        message: String,
    },

    /// A grammar pattern failed to compile.
    #[error("invalid pattern: {message}")]
    InvalidPattern {
        /// Compiler message.
        message: String,
    },
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// The full input handed to the parser.
    pub input: Option<String>,
    /// The clause being resolved when the error occurred.
    pub clause: Option<String>,
    /// Zero-based clause position within the input.
    pub clause_index: Option<usize>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the original input.
    #[must_use]
    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = Some(input.into());
        self
    }

    /// Sets the clause text and its position.
    #[must_use]
    pub fn with_clause(mut self, index: usize, clause: impl Into<String>) -> Self {
        self.clause_index = Some(index);
        self.clause = Some(clause.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(clause) = &self.clause {
            write!(f, "in clause {clause:?}")?;
            if let Some(index) = self.clause_index {
                write!(f, " (#{})", index + 1)?;
            }
        }
        if let Some(input) = &self.input {
            if self.clause.is_some() {
                write!(f, " ")?;
            }
            write!(f, "of {input:?}")?;
        }
        Ok(())
    }
}
