//! Turning clause fields into passages.
//!
//! Clauses are resolved left to right. Whatever a clause leaves unsaid (the
//! book in "19-21", the chapter in "16-end") is taken from the clause before
//! it, so the resolver threads a small [`ParseState`] through the fold: each
//! call takes the previous state by value and hands back the next one.

use std::sync::Arc;

use pericope_foundation::{Book, Error, Fragment, Passage, Reference, Result};

use crate::clause::{ClauseFields, Token};
use crate::registry::BookRegistry;

/// What earlier clauses established, for later clauses to inherit.
#[derive(Clone, Debug, Default)]
pub struct ParseState {
    /// Last book named or inherited
    pub book: Option<Arc<Book>>,
    /// Last chapter given explicitly
    pub chapter: Option<u32>,
    /// Last verse given explicitly
    pub verse: Option<u32>,
}

impl ParseState {
    /// State before the first clause.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// The resolved start of a clause.
struct Start {
    reference: Reference,
    book: Arc<Book>,
    chapter: Option<u32>,
    verse: Option<u32>,
}

/// Resolves one clause against the registry.
///
/// `end` is `None` for a clause without a range dash.
///
/// # Errors
///
/// Returns `UnknownBook` if no book is named or inherited, a bounds error if
/// a chapter or verse does not exist, or `InvertedRange` if the end sorts
/// before the start.
pub fn resolve_clause(
    registry: &BookRegistry,
    state: ParseState,
    start: &ClauseFields,
    end: Option<&ClauseFields>,
) -> Result<(Passage, ParseState)> {
    let resolved = resolve_start(registry, state, start)?;

    let (to, next) = match end {
        None => resolve_open_end(&resolved)?,
        Some(end) => resolve_end(registry, &resolved, end)?,
    };

    let passage = Passage::new(resolved.reference, to)?;
    Ok((passage, next))
}

fn resolve_start(registry: &BookRegistry, state: ParseState, fields: &ClauseFields) -> Result<Start> {
    let ParseState {
        book: carried_book,
        chapter: mut carried_chapter,
        verse: mut carried_verse,
    } = state;

    let (book, inherited) = match &fields.book {
        Some(name) => {
            carried_chapter = None;
            carried_verse = None;
            (registry.lookup(name)?, false)
        }
        None => (
            carried_book.ok_or_else(|| Error::unknown_book(""))?,
            true,
        ),
    };

    let single_chapter = book.chapter_count() == 1;
    let mut chapter: Option<u32> = None;
    let mut verse: Option<Token> = None;
    let mut verse_only = false;

    if let Some(numeric) = fields.numeric {
        if numeric.explicitly_verse && (single_chapter || (inherited && carried_chapter.is_some())) {
            verse_only = true;
        } else if fields.verse.is_some() || carried_verse.is_none() {
            chapter = Some(chapter_number(&book, numeric.token));
        } else {
            verse = Some(numeric.token);
        }
    }

    if let Some(token) = fields.verse {
        if verse_only || chapter.is_some() || single_chapter {
            verse = Some(token);
        } else {
            chapter = Some(chapter_number(&book, token));
        }
    }

    let chapter = chapter.or(carried_chapter);
    let chapter_for_reference = chapter.unwrap_or(1);
    let (verse_number, fragment) = match verse {
        Some(token) => {
            let (number, fragment) = verse_number(&book, chapter_for_reference, token)?;
            (Some(number), fragment)
        }
        None => (None, None),
    };

    let reference = Reference::new(
        Arc::clone(&book),
        chapter_for_reference,
        verse_number.unwrap_or(1),
        fragment,
    )?;

    tracing::trace!(
        book = book.name(),
        ?chapter,
        verse = ?verse_number,
        inherited,
        "resolved clause start"
    );

    Ok(Start {
        reference,
        book,
        chapter,
        verse: verse_number,
    })
}

/// "John 3:16" ends where it starts; "John 3" and "John" run to the end of
/// the chapter or the book.
fn resolve_open_end(start: &Start) -> Result<(Reference, ParseState)> {
    let to = if start.verse.is_some() {
        start.reference.clone()
    } else {
        let chapter = start.chapter.unwrap_or_else(|| start.book.chapter_count());
        let last = start.book.verses_in_chapter(chapter)?;
        Reference::new(Arc::clone(&start.book), chapter, last, None)?
    };

    let state = ParseState {
        book: Some(Arc::clone(&start.book)),
        chapter: start.chapter,
        verse: start.verse,
    };
    Ok((to, state))
}

fn resolve_end(
    registry: &BookRegistry,
    start: &Start,
    fields: &ClauseFields,
) -> Result<(Reference, ParseState)> {
    let (book, named) = match &fields.book {
        Some(name) => (registry.lookup(name)?, true),
        None => (Arc::clone(&start.book), false),
    };

    let mut chapter: Option<u32> = None;
    let mut verse: Option<Token> = None;

    // "3:16-18" continues the start's chapter; "3:16-Acts 5" does not
    match fields.numeric {
        Some(numeric) if numeric.explicitly_verse && named => chapter = Some(1),
        Some(numeric) if numeric.explicitly_verse => {}
        Some(numeric) if !named && start.verse.is_some() && fields.verse.is_none() => {
            verse = Some(numeric.token);
        }
        Some(numeric) => chapter = Some(chapter_number(&book, numeric.token)),
        None => {}
    }
    if let Some(token) = fields.verse {
        verse = Some(token);
    }

    let chapter_for_reference = match (chapter, named) {
        (Some(chapter), _) => chapter,
        (None, true) => book.chapter_count(),
        (None, false) => start.chapter.unwrap_or_else(|| book.chapter_count()),
    };

    let (verse_number, fragment) = match verse {
        Some(token) => {
            let (number, fragment) = verse_number(&book, chapter_for_reference, token)?;
            (Some(number), fragment)
        }
        None => (None, None),
    };
    let last = book.verses_in_chapter(chapter_for_reference)?;
    let to = Reference::new(
        Arc::clone(&book),
        chapter_for_reference,
        verse_number.unwrap_or(last),
        fragment,
    )?;

    let state = ParseState {
        book: Some(book),
        chapter: chapter.or(start.chapter),
        verse: verse_number,
    };
    Ok((to, state))
}

/// A chapter token as a number; `end` is the last chapter.
fn chapter_number(book: &Book, token: Token) -> u32 {
    match token {
        Token::Number { value, .. } => value,
        Token::End => book.chapter_count(),
    }
}

/// A verse token as a number and fragment; `end` is the chapter's last verse.
fn verse_number(book: &Book, chapter: u32, token: Token) -> Result<(u32, Option<Fragment>)> {
    match token {
        Token::End => Ok((book.verses_in_chapter(chapter)?, None)),
        Token::Number { value: 0, .. } => {
            let verses = book.verses_in_chapter(chapter)?;
            Err(Error::verse_out_of_range(book.name(), chapter, 0, verses))
        }
        Token::Number { value, fragment } => Ok((value, fragment)),
    }
}
