//! Schema mini-language compiler and evaluator.
//!
//! A schema string describes how to assemble an identifier from a name pair:
//! an `f` marker selects the first name, an `l` marker the last name, digits
//! immediately after a marker give a truncation length, and the first
//! occurrence of one of `. - _ +` becomes the separator. Marker order in the
//! schema string decides render order. Examples: `f1l` -> `jsmith`,
//! `l1f` -> `sjohn`, `f1.l` -> `j.smith`, `l` -> `smith`.
//!
//! Compilation happens once per run via [`SchemaSpec::compile`]; the result
//! is an immutable value applied to every pair.
use crate::name::NamePair;

/// Separator characters the mini-language accepts.
pub const SEPARATOR_CHARS: &[char] = &['.', '-', '_', '+'];

#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("schema \"{0}\" contains neither a first (f) nor a last (l) name marker")]
    NoNameMarker(String),
}

/// How one name part (first or last) is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartSpec {
    /// Number of characters to keep; `None` keeps the full name. Zero is
    /// legal and yields an empty fragment.
    pub truncate: Option<usize>,
}

/// Compiled form of a schema string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaSpec {
    pub first: Option<PartSpec>,
    pub last: Option<PartSpec>,
    pub separator: Option<char>,
    pub first_before_last: bool,
}

/// Render-time switches taken from the run configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    pub keep_case: bool,
    pub keep_hyphen_first: bool,
    pub keep_hyphen_last: bool,
}

/// Locate the first occurrence of `marker` and parse any digits immediately
/// following it. Returns the marker's byte index and the truncation length.
fn find_marker(raw: &str, marker: char) -> Option<(usize, Option<usize>)> {
    let idx = raw.find(marker)?;
    let digits: String = raw[idx + marker.len_utf8()..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    let truncate = if digits.is_empty() {
        None
    } else {
        // A digit run too long for usize means "longer than any name".
        Some(digits.parse().unwrap_or(usize::MAX))
    };
    Some((idx, truncate))
}

/// Reduce a hyphenated compound to its head unless hyphens are kept, then
/// truncate to the requested character count.
fn render_part(name: &str, spec: PartSpec, keep_hyphen: bool) -> String {
    let base = if keep_hyphen {
        name
    } else {
        name.split('-').next().unwrap_or(name)
    };
    match spec.truncate {
        Some(n) => base.chars().take(n).collect(),
        None => base.to_string(),
    }
}

impl SchemaSpec {
    /// Compile a raw schema string. A schema naming neither the first nor
    /// the last name cannot produce meaningful output, so compilation fails
    /// up front instead of degrading every rendered identifier.
    pub fn compile(raw: &str) -> Result<Self, SchemaError> {
        let first_at = find_marker(raw, 'f');
        let last_at = find_marker(raw, 'l');
        if first_at.is_none() && last_at.is_none() {
            return Err(SchemaError::NoNameMarker(raw.to_string()));
        }
        let separator = raw.chars().find(|c| SEPARATOR_CHARS.contains(c));
        let first_before_last = match (first_at, last_at) {
            (Some((f_idx, _)), Some((l_idx, _))) => f_idx < l_idx,
            _ => true,
        };
        Ok(Self {
            first: first_at.map(|(_, truncate)| PartSpec { truncate }),
            last: last_at.map(|(_, truncate)| PartSpec { truncate }),
            separator,
            first_before_last,
        })
    }

    /// Apply the schema to one name pair. `suffix` is the mail domain for
    /// e-mail output and empty for usernames. The whole result is folded to
    /// lowercase unless case preservation is requested.
    pub fn render(&self, pair: &NamePair, suffix: &str, opts: RenderOptions) -> String {
        let first = self
            .first
            .map(|spec| render_part(&pair.first, spec, opts.keep_hyphen_first));
        let last = self
            .last
            .map(|spec| render_part(&pair.last, spec, opts.keep_hyphen_last));
        let sep = self.separator.map(String::from).unwrap_or_default();
        let core = match (first, last) {
            (Some(f), Some(l)) => {
                if self.first_before_last {
                    format!("{f}{sep}{l}")
                } else {
                    format!("{l}{sep}{f}")
                }
            }
            (Some(f), None) => f,
            (None, Some(l)) => l,
            // compile guarantees at least one marker
            (None, None) => String::new(),
        };
        fold_case(format!("{core}{suffix}"), opts.keep_case)
    }
}

/// Default two-part rule used when no schema is supplied: `first.last` plus
/// the suffix. Hyphens are kept as-is in this mode.
pub fn render_default(pair: &NamePair, suffix: &str, keep_case: bool) -> String {
    fold_case(format!("{}.{}{}", pair.first, pair.last, suffix), keep_case)
}

fn fold_case(s: String, keep_case: bool) -> String {
    if keep_case { s } else { s.to_lowercase() }
}
