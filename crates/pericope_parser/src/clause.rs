//! Structural grammar for one clause.
//!
//! A clause is at most two halves joined by `-`. Each half is matched
//! against a single pattern that pulls out an optional book name, an
//! optional leading number (chapter or verse, decided later by the
//! resolver) and an optional verse. The grammar knows nothing about real
//! books; that is the resolver's job.

use regex::{Captures, Regex};

use pericope_foundation::{Error, Fragment, Result};

use crate::compile_pattern;

/// Structural pattern for one half of a clause, matched on lowercased text.
const HALF_PATTERN: &str = concat!(
    r"^\s*",
    r"(?P<book>(?:[0-9]+\s+)?[^0-9]+)?",
    r"(?:(?P<chapter_or_verse>[0-9]+[abc]?)",
    r"(?:\s*[.\s:v]+\s*(?P<verse>[0-9]+[abc]?|end))?)?",
    r"\s*$",
);

/// Book suffixes that mean "chapter follows".
const CHAPTER_MARKERS: [&str; 1] = ["ch"];

/// Book suffixes that mean "verse follows".
const VERSE_MARKERS: [&str; 3] = ["v", "verse", "verses"];

// =============================================================================
// Tokens
// =============================================================================

/// A number in a clause, or the `end` keyword.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token {
    /// A literal number with an optional fragment suffix.
    Number {
        /// Numeric value
        value: u32,
        /// Trailing `a`, `b` or `c`
        fragment: Option<Fragment>,
    },
    /// The last chapter of the book, or the last verse of the chapter.
    End,
}

impl Token {
    /// Creates a number token without a fragment.
    #[must_use]
    pub const fn number(value: u32) -> Self {
        Self::Number {
            value,
            fragment: None,
        }
    }

    /// The fragment suffix, if any.
    #[must_use]
    pub const fn fragment(self) -> Option<Fragment> {
        match self {
            Self::Number { fragment, .. } => fragment,
            Self::End => None,
        }
    }
}

/// The leading number of a half, whose role the resolver decides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Numeric {
    /// The number itself
    pub token: Token,
    /// Set when the text carried a `v`/`verse` marker before the number, in
    /// which case the real number has moved to [`ClauseFields::verse`].
    pub explicitly_verse: bool,
}

impl Numeric {
    /// A number with no verse marker.
    #[must_use]
    pub const fn plain(token: Token) -> Self {
        Self {
            token,
            explicitly_verse: false,
        }
    }
}

/// The fields extracted from one half of a clause.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClauseFields {
    /// Book name as written, lowercased, markers stripped
    pub book: Option<String>,
    /// Leading number
    pub numeric: Option<Numeric>,
    /// Number after a verse separator
    pub verse: Option<Token>,
}

impl ClauseFields {
    /// Whether the numeric token was marked as a verse.
    #[must_use]
    pub fn is_explicit_verse(&self) -> bool {
        self.numeric.is_some_and(|numeric| numeric.explicitly_verse)
    }
}

/// Parses `"16"`, `"16b"`, `"36B"` or `"end"`.
///
/// # Errors
///
/// Returns `UnparsableClause` if the digits are missing or overflow.
pub fn parse_number_with_fragment(text: &str) -> Result<Token> {
    let text = text.trim();
    if text.eq_ignore_ascii_case("end") {
        return Ok(Token::End);
    }

    let (digits, fragment) = match text.chars().last().and_then(Fragment::from_char) {
        Some(fragment) => (&text[..text.len() - 1], Some(fragment)),
        None => (text, None),
    };

    let value = digits
        .parse::<u32>()
        .map_err(|_| Error::unparsable_clause(text))?;
    Ok(Token::Number { value, fragment })
}

// =============================================================================
// Grammar
// =============================================================================

/// Compiled clause grammar.
#[derive(Clone, Debug)]
pub struct ClauseGrammar {
    half: Regex,
}

impl ClauseGrammar {
    /// Compiles the grammar.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPattern` if the pattern fails to compile.
    pub fn new() -> Result<Self> {
        Ok(Self {
            half: compile_pattern(HALF_PATTERN)?,
        })
    }

    /// Splits a clause into its start half and optional end half.
    ///
    /// # Errors
    ///
    /// Returns `MalformedRange` if the clause has more than one `-`.
    pub fn split_range(clause: &str) -> Result<(&str, Option<&str>)> {
        let mut halves = clause.split('-');
        let start = halves.next().unwrap_or_default();
        let end = halves.next();
        if halves.next().is_some() {
            return Err(Error::malformed_range(clause));
        }
        Ok((start, end))
    }

    /// Extracts the fields of one half.
    ///
    /// # Errors
    ///
    /// Returns `UnparsableClause` if the half does not fit the grammar.
    pub fn parse_half(&self, text: &str) -> Result<ClauseFields> {
        let lowered = text.to_lowercase();
        let captures = self
            .half
            .captures(&lowered)
            .ok_or_else(|| Error::unparsable_clause(text.trim()))?;

        let mut book = capture(&captures, "book")
            .map(|book| book.split_whitespace().collect::<Vec<_>>().join(" "))
            .filter(|book| !book.is_empty());
        let mut numeric = capture(&captures, "chapter_or_verse")
            .map(parse_number_with_fragment)
            .transpose()?
            .map(Numeric::plain);
        let mut verse = capture(&captures, "verse")
            .map(parse_number_with_fragment)
            .transpose()?;

        if book.as_deref() == Some("end") && numeric.is_none() && verse.is_none() {
            book = None;
            numeric = Some(Numeric::plain(Token::End));
        }

        if let Some(name) = book.take() {
            book = strip_marker(&name, &CHAPTER_MARKERS).unwrap_or(Some(name));
        }

        if let Some(name) = book.take() {
            match strip_marker(&name, &VERSE_MARKERS) {
                Some(remainder) => {
                    book = remainder;
                    if verse.is_none() {
                        if let Some(leading) = numeric {
                            verse = Some(leading.token);
                            numeric = Some(Numeric {
                                token: Token::number(1),
                                explicitly_verse: true,
                            });
                        }
                    }
                }
                None => book = Some(name),
            }
        }

        Ok(ClauseFields {
            book,
            numeric,
            verse,
        })
    }
}

fn capture<'t>(captures: &Captures<'t>, name: &str) -> Option<&'t str> {
    captures
        .name(name)
        .map(|m| m.as_str().trim())
        .filter(|text| !text.is_empty())
}

/// Strips a trailing marker word from a book name.
///
/// Returns `None` if no marker matched, `Some(None)` if the whole name was a
/// marker, and `Some(Some(rest))` if the rest still names something. A
/// remainder without letters ("2" from "2 ch") is not stripped, since it is
/// really an abbreviation such as 2 Chronicles.
fn strip_marker(name: &str, markers: &[&str]) -> Option<Option<String>> {
    for marker in markers {
        if name == *marker {
            return Some(None);
        }
        if let Some(rest) = name.strip_suffix(marker) {
            if let Some(rest) = rest.strip_suffix(' ') {
                if rest.chars().any(|ch| ch.is_ascii_alphabetic()) {
                    return Some(Some(rest.trim().to_string()));
                }
            }
        }
    }
    None
}
