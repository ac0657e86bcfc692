//! Property tests over the standard canon

use std::sync::Arc;

use pericope_foundation::{Book, ErrorKind, Fragment, Passage, Reference};
use pericope_parser::{BookRegistry, ReferenceParser};
use proptest::prelude::*;

/// A point in the canon chosen by ratios, so every draw is valid.
#[derive(Clone, Debug)]
struct Point {
    book: usize,
    chapter: f64,
    verse: f64,
    fragment: Option<Fragment>,
}

fn fragment() -> impl Strategy<Value = Option<Fragment>> {
    prop_oneof![
        4 => Just(None),
        1 => Just(Some(Fragment::A)),
        1 => Just(Some(Fragment::B)),
        1 => Just(Some(Fragment::C)),
    ]
}

fn point() -> impl Strategy<Value = Point> {
    (0usize..66, 0.0f64..1.0, 0.0f64..1.0, fragment()).prop_map(
        |(book, chapter, verse, fragment)| Point {
            book,
            chapter,
            verse,
            fragment,
        },
    )
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn scale(ratio: f64, max: u32) -> u32 {
    ((ratio * f64::from(max)) as u32).min(max - 1) + 1
}

fn reference(books: &[Arc<Book>], point: &Point) -> Reference {
    let book = &books[point.book];
    let chapter = scale(point.chapter, book.chapter_count());
    let verses = book.verses_in_chapter(chapter).unwrap();
    let verse = scale(point.verse, verses);
    Reference::new(Arc::clone(book), chapter, verse, point.fragment).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn formatted_passages_parse_back(a in point(), b in point()) {
        let registry = BookRegistry::standard().unwrap();
        let books: Vec<_> = registry.books().cloned().collect();
        let (a, b) = (reference(&books, &a), reference(&books, &b));
        let (from, to) = if a <= b { (a, b) } else { (b, a) };
        let passage = Passage::new(from, to).unwrap();

        let text = passage.format();
        let parser = ReferenceParser::new(registry, &Default::default()).unwrap();
        let parsed = parser.parse(&text).unwrap();
        prop_assert_eq!(parsed, vec![passage], "{}", text);
    }

    #[test]
    fn parsed_ranges_are_ordered(
        book in 0usize..66,
        c1 in 0.0f64..1.0, v1 in 0.0f64..1.0,
        c2 in 0.0f64..1.0, v2 in 0.0f64..1.0
    ) {
        let registry = BookRegistry::standard().unwrap();
        let name = registry.books().nth(book).unwrap().name().to_string();
        let target = registry.lookup(&name).unwrap();
        let (ch1, ch2) = (scale(c1, target.chapter_count()), scale(c2, target.chapter_count()));
        let verse1 = scale(v1, target.verses_in_chapter(ch1).unwrap());
        let verse2 = scale(v2, target.verses_in_chapter(ch2).unwrap());

        let parser = ReferenceParser::standard().unwrap();
        match parser.parse(&format!("{name} {ch1}:{verse1}-{ch2}:{verse2}")) {
            Ok(passages) => {
                for passage in passages {
                    prop_assert!(passage.from.ordering_key() <= passage.to.ordering_key());
                }
            }
            Err(err) => {
                let inverted = matches!(err.kind, ErrorKind::InvertedRange { .. });
                prop_assert!(inverted);
            }
        }
    }
}
