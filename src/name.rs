//! Name pair data model.
//!
//! A `NamePair` holds the (first, last) name extracted from one input line.
//! Pairs are produced by the `extract` module and consumed read-only by the
//! schema evaluator and output formatters; both fields are guaranteed
//! non-empty by the extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamePair {
    pub first: String,
    pub last: String,
}

impl NamePair {
    pub fn new(first: &str, last: &str) -> Self {
        Self {
            first: first.to_string(),
            last: last.to_string(),
        }
    }
}
