//! Name extraction from raw input lines.
//!
//! Turns a block of text into an ordered `Vec<NamePair>`. Lines that carry no
//! ASCII letter are dropped silently; lines containing characters from the
//! disallowed set are dropped with a logged skip notice. A `Dr.` title prefix
//! is stripped before the disallowed-character check so titled names survive
//! the dot filter.
use log::warn;
use regex::Regex;

use crate::name::NamePair;

/// Characters that disqualify a line entirely. Deliberately defensive:
/// anything that smells like markup or shell metacharacters is skipped.
const DISALLOWED_CHARS: &[char] = &[
    '.', '<', '>', '/', '(', ')', '{', '}', '[', ']', '~', '`',
];

/// Compile the token delimiter. `None` selects the default whitespace run;
/// a user-supplied value is treated as a regex pattern.
pub fn build_delimiter(pattern: Option<&str>) -> Result<Regex, regex::Error> {
    Regex::new(pattern.unwrap_or(r"\s+"))
}

/// Strip the first occurrence of a literal `Dr.` title plus any whitespace
/// immediately following it. Case-sensitive, first occurrence only.
fn strip_title(line: &str) -> String {
    match line.find("Dr.") {
        Some(idx) => {
            let rest = &line[idx + 3..];
            format!("{}{}", &line[..idx], rest.trim_start())
        }
        None => line.to_string(),
    }
}

/// Extract a single name pair from one raw line, or `None` when the line is
/// filtered out. Filtering is not an error; the batch always continues.
pub fn extract_name_line(line: &str, delimiter: &Regex) -> Option<NamePair> {
    let line = line.trim_end();
    if !line.chars().any(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    let line = strip_title(line);
    if line.chars().any(|c| DISALLOWED_CHARS.contains(&c)) {
        warn!("bad characters detected in name: skipping {}", line);
        return None;
    }
    let tokens: Vec<&str> = delimiter.split(&line).filter(|t| !t.is_empty()).collect();
    match (tokens.first(), tokens.last()) {
        (Some(first), Some(last)) => Some(NamePair::new(first, last)),
        _ => {
            warn!("no name tokens after split: skipping {}", line);
            None
        }
    }
}

/// Extract all name pairs from input contents, preserving input order.
pub fn extract_names(contents: &str, delimiter: &Regex) -> Vec<NamePair> {
    contents
        .lines()
        .filter_map(|line| extract_name_line(line, delimiter))
        .collect()
}
