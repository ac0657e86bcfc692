//! Alternative spellings for numbered books.
//!
//! "1 Kings" is also written "I Kings", "First Kings" and "1Kings". Rather
//! than list each spelling per book, every alias that starts with an arabic
//! prefix is expanded here.
//!
//! The unspaced form only matters for direct registry lookups such as
//! `BookRegistry::lookup("1kings")`. Free text never reaches the registry in
//! that shape: the parser's normalizer splits "1Kings" into "1 Kings" first.

/// Prefix spellings for 1, 2 and 3.
const PREFIXES: [(&str, &[&str]); 3] = [
    ("1", &["i", "first"]),
    ("2", &["ii", "second"]),
    ("3", &["iii", "third"]),
];

/// Expands `alias` into its prefix variants, not including `alias` itself.
///
/// Aliases without a leading "1 ", "2 " or "3 " have no variants.
#[must_use]
pub fn numbered_variants(alias: &str) -> Vec<String> {
    let Some((prefix, rest)) = alias.split_once(' ') else {
        return Vec::new();
    };
    let Some((_, spellings)) = PREFIXES.iter().find(|(digit, _)| *digit == prefix) else {
        return Vec::new();
    };

    let mut variants: Vec<String> = spellings
        .iter()
        .map(|spelling| format!("{spelling} {rest}"))
        .collect();
    variants.push(format!("{prefix}{rest}"));
    variants
}
