//! Full pipeline tests against known inputs

use pericope_foundation::ErrorKind;
use pericope_parser::ReferenceParser;

use crate::{expected, pairs};

fn check(input: &str, want: &[(&str, &str)]) {
    assert_eq!(pairs(input), expected(want), "input {input:?}");
}

// =============================================================================
// Verse Delimiters
// =============================================================================

#[test]
fn readme_example() {
    check(
        "1 John 5:4-17, 19-21 & Esther 2",
        &[
            ("1 John 5:4", "1 John 5:17"),
            ("1 John 5:19", "1 John 5:21"),
            ("Esther 2:1", "Esther 2:23"),
        ],
    );
}

#[test]
fn every_verse_delimiter() {
    let inputs = [
        "John 3:16",
        "John 3v16",
        "John 3: v16",
        "John 3 v16",
        "John 3vv16",
        "John 3 vv16",
        "John c3v16",
        "John ch3v16",
        "John ch3vv16",
        "John ch3 v16",
        "John chapter3verse16",
        "John chapter3 verse16",
        "John chapter 3 verse 16",
        "John 3.16",
        "John 3 16",
    ];
    for input in inputs {
        check(input, &[("John 3:16", "John 3:16")]);
    }
}

// =============================================================================
// Whole Books and Chapters
// =============================================================================

#[test]
fn entire_book() {
    check("John", &[("John 1:1", "John 21:25")]);
}

#[test]
fn whole_chapters() {
    check("John 3", &[("John 3:1", "John 3:36")]);
    check("John 3, 4", &[("John 3:1", "John 3:36"), ("John 4:1", "John 4:54")]);
    check(
        "1 Peter 2, 5 & Job 34",
        &[
            ("1 Peter 2:1", "1 Peter 2:25"),
            ("1 Peter 5:1", "1 Peter 5:14"),
            ("Job 34:1", "Job 34:37"),
        ],
    );
    check("Psalm 34", &[("Psalms 34:1", "Psalms 34:22")]);
    check("John 1 and 2", &[("John 1:1", "John 1:51"), ("John 2:1", "John 2:25")]);
}

// =============================================================================
// Ranges
// =============================================================================

#[test]
fn verse_ranges_in_one_chapter() {
    check(
        "John 3:16-18, 19-22",
        &[("John 3:16", "John 3:18"), ("John 3:19", "John 3:22")],
    );
    check(
        "1 Peter 2:15-16, 18-20",
        &[("1 Peter 2:15", "1 Peter 2:16"), ("1 Peter 2:18", "1 Peter 2:20")],
    );
}

#[test]
fn ranges_across_chapters() {
    check("Gen 1:1-4:26", &[("Genesis 1:1", "Genesis 4:26")]);
    check("1 John 3:1-4:12", &[("1 John 3:1", "1 John 4:12")]);
    check("Gen 1-4:26", &[("Genesis 1:1", "Genesis 4:26")]);
}

#[test]
fn ranges_written_with_to() {
    check("1 John 3:1 to 4:12", &[("1 John 3:1", "1 John 4:12")]);
    check(" 1 John 3:12 to 1 John 4:21", &[("1 John 3:12", "1 John 4:21")]);
}

#[test]
fn end_keyword() {
    check("John 3:16-end", &[("John 3:16", "John 3:36")]);
    check("John 3-end", &[("John 3:1", "John 21:25")]);
    check(
        "Deut 6: 4-9, 16-end & Luke 15: 1-10",
        &[
            ("Deuteronomy 6:4", "Deuteronomy 6:9"),
            ("Deuteronomy 6:16", "Deuteronomy 6:25"),
            ("Luke 15:1", "Luke 15:10"),
        ],
    );
}

#[test]
fn en_and_em_dashes() {
    for dash in ['\u{2013}', '\u{2014}'] {
        check(
            &format!("1 Corinthians 13:1{dash}3"),
            &[("1 Corinthians 13:1", "1 Corinthians 13:3")],
        );
        check(
            &format!("1 Corinthians 12{dash}13"),
            &[("1 Corinthians 12:1", "1 Corinthians 13:13")],
        );
        check(
            &format!("1 Corinthians{dash}2 Corinthians"),
            &[("1 Corinthians 1:1", "2 Corinthians 13:14")],
        );
    }
}

// =============================================================================
// Carried State
// =============================================================================

#[test]
fn single_verses_in_different_chapters() {
    check(
        "Gen 1:1; 4:26",
        &[("Genesis 1:1", "Genesis 1:1"), ("Genesis 4:26", "Genesis 4:26")],
    );
}

#[test]
fn cross_book_range_then_carry() {
    check(
        "Genesis 1:1 - Exodus 5:2 & 6:3-4",
        &[("Genesis 1:1", "Exodus 5:2"), ("Exodus 6:3", "Exodus 6:4")],
    );
}

#[test]
fn many_clauses() {
    check(
        "Gen 1:1, 3-4; 4:26-5:1; Lev 4:5; 5:2; Phlm 1:2; 1 John 1;2 John 1; 3 John; Pss 1-2",
        &[
            ("Genesis 1:1", "Genesis 1:1"),
            ("Genesis 1:3", "Genesis 1:4"),
            ("Genesis 4:26", "Genesis 5:1"),
            ("Leviticus 4:5", "Leviticus 4:5"),
            ("Leviticus 5:2", "Leviticus 5:2"),
            ("Philemon 1:2", "Philemon 1:2"),
            ("1 John 1:1", "1 John 1:10"),
            ("2 John 1:1", "2 John 1:13"),
            ("3 John 1:1", "3 John 1:15"),
            ("Psalms 1:1", "Psalms 2:12"),
        ],
    );
}

#[test]
fn verse_marker_continues_chapter() {
    check(
        "John 3:16, v 18",
        &[("John 3:16", "John 3:16"), ("John 3:18", "John 3:18")],
    );
}

#[test]
fn verse_marker_after_named_end_book() {
    check("Genesis 1:1 - Exodus v 5", &[("Genesis 1:1", "Exodus 1:5")]);
    check("Exodus v 5", &[("Exodus 1:5", "Exodus 1:5")]);
}

// =============================================================================
// Book Names
// =============================================================================

#[test]
fn abbreviations() {
    check(
        "John 3:16 & Isiah 22",
        &[("John 3:16", "John 3:16"), ("Isaiah 22:1", "Isaiah 22:25")],
    );
    check(
        "Is 53: 1-6 & 2 Cor 5: 20-21",
        &[
            ("Isaiah 53:1", "Isaiah 53:6"),
            ("2 Corinthians 5:20", "2 Corinthians 5:21"),
        ],
    );
    check("2 Cor. 5: 11-21", &[("2 Corinthians 5:11", "2 Corinthians 5:21")]);
}

#[test]
fn roman_numerals() {
    check("I Samuel 10:22", &[("1 Samuel 10:22", "1 Samuel 10:22")]);
    check("i Samuel 10:22", &[("1 Samuel 10:22", "1 Samuel 10:22")]);
    check(
        "II Kings 1:1 & I Samuel 10:22",
        &[("2 Kings 1:1", "2 Kings 1:1"), ("1 Samuel 10:22", "1 Samuel 10:22")],
    );
}

#[test]
fn numbered_books_with_and_without_space() {
    for (first, second) in [("1Kings", "2Kings"), ("1 Kings", "2 Kings")] {
        check(first, &[("1 Kings 1:1", "1 Kings 22:53")]);
        check(&format!("{first} 1"), &[("1 Kings 1:1", "1 Kings 1:53")]);
        check(&format!("{first} 1:1"), &[("1 Kings 1:1", "1 Kings 1:1")]);
        check(&format!("{first} 1:1-2"), &[("1 Kings 1:1", "1 Kings 1:2")]);
        check(
            &format!("{first} 1:1,12"),
            &[("1 Kings 1:1", "1 Kings 1:1"), ("1 Kings 1:12", "1 Kings 1:12")],
        );
        check(
            &format!("{first}; {second}"),
            &[("1 Kings 1:1", "1 Kings 22:53"), ("2 Kings 1:1", "2 Kings 25:30")],
        );
        check(
            &format!("{first} 1; {second} 1"),
            &[("1 Kings 1:1", "1 Kings 1:53"), ("2 Kings 1:1", "2 Kings 1:18")],
        );
        check(
            &format!("{first} 1:1-2; {second} 1:1-2"),
            &[("1 Kings 1:1", "1 Kings 1:2"), ("2 Kings 1:1", "2 Kings 1:2")],
        );
        check(
            &format!("{first} 1:1,12; {second} 1:1,12"),
            &[
                ("1 Kings 1:1", "1 Kings 1:1"),
                ("1 Kings 1:12", "1 Kings 1:12"),
                ("2 Kings 1:1", "2 Kings 1:1"),
                ("2 Kings 1:12", "2 Kings 1:12"),
            ],
        );
        check(
            &format!("{first} 22:53-{second} 1:12"),
            &[("1 Kings 22:53", "2 Kings 1:12")],
        );
    }
    check("1 Kings-2 Kings", &[("1 Kings 1:1", "2 Kings 25:30")]);
}

#[test]
fn ch_as_chronicles_and_as_chapter() {
    check("2 CH ch 13  v 01", &[("2 Chronicles 13:1", "2 Chronicles 13:1")]);
    check("2 CH 13  v 01", &[("2 Chronicles 13:1", "2 Chronicles 13:1")]);
}

#[test]
fn single_chapter_books() {
    check("Obadiah v 01", &[("Obadiah 1:1", "Obadiah 1:1")]);
    check("Obadiah verse 01", &[("Obadiah 1:1", "Obadiah 1:1")]);
    check("Obadiah verse 15", &[("Obadiah 1:15", "Obadiah 1:15")]);
    check("Obadiah", &[("Obadiah 1:1", "Obadiah 1:21")]);
}

// =============================================================================
// Fragments
// =============================================================================

#[test]
fn fragments() {
    check("Philippians 2:14-15a", &[("Philippians 2:14", "Philippians 2:15a")]);
    check("John 4:7b-4:8", &[("John 4:7b", "John 4:8")]);
    check("Mark 1v4b-15", &[("Mark 1:4b", "Mark 1:15")]);
    check("Acts 2:39a", &[("Acts 2:39a", "Acts 2:39a")]);
    check("John 3:16b-17a", &[("John 3:16b", "John 3:17a")]);
}

#[test]
fn capital_fragments_and_double_spaces() {
    check("Luke 24  36B-48", &[("Luke 24:36b", "Luke 24:48")]);
    check("Luke 24:36B-48", &[("Luke 24:36b", "Luke 24:48")]);
}

// =============================================================================
// Errors
// =============================================================================

fn error_kind(input: &str) -> ErrorKind {
    ReferenceParser::standard()
        .unwrap()
        .parse(input)
        .expect_err(input)
        .kind
}

#[test]
fn empty_input() {
    assert_eq!(error_kind(""), ErrorKind::EmptyInput);
}

#[test]
fn inverted_range() {
    assert!(matches!(error_kind("Psalm 34-20"), ErrorKind::InvertedRange { .. }));
}

#[test]
fn unknown_book() {
    assert!(matches!(error_kind("Bob"), ErrorKind::UnknownBook { .. }));
}

#[test]
fn number_without_book() {
    assert!(matches!(error_kind("1"), ErrorKind::UnknownBook { ref name } if name.is_empty()));
}

#[test]
fn bounds_errors() {
    assert!(matches!(
        error_kind("John 22"),
        ErrorKind::ChapterOutOfRange { chapter: 22, chapters: 21, .. }
    ));
    assert!(matches!(
        error_kind("John 3:37"),
        ErrorKind::VerseOutOfRange { verse: 37, verses: 36, .. }
    ));
}

#[test]
fn malformed_range() {
    assert!(matches!(error_kind("John 3:1-2-3"), ErrorKind::MalformedRange { .. }));
}

#[test]
fn unparsable_clause() {
    assert!(matches!(error_kind("John 3:16:17:18"), ErrorKind::UnparsableClause { .. }));
}

#[test]
fn later_clause_failure_discards_earlier_passages() {
    let err = ReferenceParser::standard()
        .unwrap()
        .parse("John 3:16; John 3:99")
        .unwrap_err();
    assert_eq!(err.context.unwrap().clause_index, Some(1));
}
