//! Character normalization for output legality.
//!
//! Two passes, in order: a small substitution table for diacritics where a
//! multi-letter transliteration is preferred (umlauts), then a generic
//! Unicode-to-ASCII pass via `deunicode` for whatever remains. The table runs
//! first so its choices win over deunicode's single-letter mappings.
use deunicode::deunicode;

/// Substitution table entries: source character to replacement string.
pub type SubstitutionTable<'a> = &'a [(char, &'a str)];

/// Default substitutions. Extend as needed.
pub const DEFAULT_SUBSTITUTIONS: SubstitutionTable<'static> =
    &[('ö', "oe"), ('ä', "ae"), ('ü', "ue")];

/// Transliterate with an explicit substitution table.
pub fn transliterate_with(input: &str, table: SubstitutionTable<'_>) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match table.iter().find(|(from, _)| *from == c) {
            Some((_, to)) => out.push_str(to),
            None if c.is_ascii() => out.push(c),
            None => out.push_str(&deunicode(&c.to_string())),
        }
    }
    out
}

/// Transliterate with the default table.
pub fn transliterate(input: &str) -> String {
    transliterate_with(input, DEFAULT_SUBSTITUTIONS)
}
