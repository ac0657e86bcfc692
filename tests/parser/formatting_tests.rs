//! Tests for canonical formatting of parsed and constructed passages

use std::sync::Arc;

use pericope_foundation::{Fragment, Passage, Reference};
use pericope_parser::{BookRegistry, ReferenceParser};

fn passage(
    registry: &BookRegistry,
    from: (&str, u32, u32, Option<Fragment>),
    to: (&str, u32, u32, Option<Fragment>),
) -> Passage {
    let reference = |(name, chapter, verse, fragment): (&str, u32, u32, Option<Fragment>)| {
        Reference::new(registry.lookup(name).unwrap(), chapter, verse, fragment).unwrap()
    };
    Passage::new(reference(from), reference(to)).unwrap()
}

#[test]
fn known_renderings() {
    let registry = BookRegistry::standard().unwrap();
    let cases = [
        (("1 John", 5, 4, None), ("1 John", 5, 17, None), "1 John 5:4-17"),
        (("1 John", 5, 19, None), ("1 John", 5, 21, None), "1 John 5:19-21"),
        (("Esther", 2, 1, None), ("Esther", 2, 23, None), "Esther 2"),
        (
            ("Philippians", 2, 14, None),
            ("Philippians", 2, 15, Some(Fragment::A)),
            "Philippians 2:14-15a",
        ),
        (("Mark", 1, 4, Some(Fragment::B)), ("Mark", 1, 15, None), "Mark 1:4b-15"),
        (("John", 1, 1, None), ("John", 21, 25, None), "John"),
        (("John", 3, 1, None), ("John", 3, 36, None), "John 3"),
        (("John", 3, 16, None), ("John", 3, 16, None), "John 3:16"),
        (("Genesis", 1, 1, None), ("Exodus", 40, 38, None), "Genesis 1:1 - Exodus 40:38"),
        (("Genesis", 1, 1, None), ("Genesis", 4, 26, None), "Genesis 1-4"),
        (("Genesis", 1, 5, None), ("Genesis", 4, 10, None), "Genesis 1:5-4:10"),
        (("Genesis", 1, 1, None), ("Exodus", 5, 2, None), "Genesis 1:1 - Exodus 5:2"),
        (("Psalms", 1, 1, None), ("Psalms", 1, 6, None), "Psalm 1"),
        (("Psalms", 1, 2, None), ("Psalms", 1, 3, None), "Psalm 1:2-3"),
        (("Psalms", 120, 1, None), ("Psalms", 134, 3, None), "Psalms 120-134"),
        (("Psalms", 1, 1, None), ("Psalms", 150, 6, None), "Psalms"),
        (("Psalms", 117, 2, None), ("Psalms", 118, 1, None), "Psalm 117:2-118:1"),
    ];
    for (from, to, want) in cases {
        assert_eq!(passage(&registry, from, to).to_string(), want);
    }
}

#[test]
fn parsed_passages_format_canonically() {
    let parser = ReferenceParser::standard().unwrap();
    let formatted: Vec<String> = parser
        .parse("Deut 6: 4-9, 16-end & Luke 15: 1-10; Pss 120-134; John")
        .unwrap()
        .iter()
        .map(Passage::format)
        .collect();
    assert_eq!(
        formatted,
        [
            "Deuteronomy 6:4-9",
            "Deuteronomy 6:16-25",
            "Luke 15:1-10",
            "Psalms 120-134",
            "John",
        ]
    );
}

#[test]
fn whole_chapter_reference_with_verse_zero() {
    let registry = BookRegistry::standard().unwrap();
    let psalms = registry.lookup("Psalms").unwrap();
    let from = Reference::new(Arc::clone(&psalms), 23, 0, None).unwrap();
    let to = Reference::new(psalms, 23, 6, None).unwrap();
    assert_eq!(Passage::new(from, to).unwrap().format(), "Psalm 23");
}
