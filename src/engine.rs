//! Run configuration and identifier generation.
//!
//! `Config` captures every run-wide setting once at startup; the generators
//! are pure functions mapping an extracted slice of name pairs to rendered
//! identifiers, one per pair, in input order.
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use regex::Regex;

use crate::extract::extract_name_line;
use crate::name::NamePair;
use crate::schema::{RenderOptions, SchemaSpec, render_default};

/// Run-wide settings. Built once at startup and read-only afterwards.
#[derive(Debug)]
pub struct Config {
    pub delimiter: Regex,
    pub mail_domain: String,
    pub directory_domain: Option<String>,
    pub schema: Option<SchemaSpec>,
    pub keep_case: bool,
    pub keep_hyphen_first: bool,
    pub keep_hyphen_last: bool,
}

impl Config {
    fn render_options(&self) -> RenderOptions {
        RenderOptions {
            keep_case: self.keep_case,
            keep_hyphen_first: self.keep_hyphen_first,
            keep_hyphen_last: self.keep_hyphen_last,
        }
    }

    /// Render one identifier core with the configured schema or the default
    /// two-part rule.
    fn render(&self, pair: &NamePair, suffix: &str) -> String {
        match &self.schema {
            Some(spec) => spec.render(pair, suffix, self.render_options()),
            None => render_default(pair, suffix, self.keep_case),
        }
    }
}

/// Stream the input file line by line and extract name pairs.
pub fn extract_from_path<P: AsRef<Path>>(path: P, config: &Config) -> Result<Vec<NamePair>> {
    let file =
        File::open(&path).with_context(|| format!("open {}", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut pairs = Vec::new();
    for line in reader.lines() {
        let line = line.with_context(|| format!("read {}", path.as_ref().display()))?;
        if let Some(pair) = extract_name_line(&line, &config.delimiter) {
            pairs.push(pair);
        }
    }
    Ok(pairs)
}

/// One e-mail address per pair: rendered core plus the mail domain.
pub fn generate_emails(pairs: &[NamePair], config: &Config) -> Vec<String> {
    pairs
        .iter()
        .map(|p| config.render(p, &config.mail_domain))
        .collect()
}

/// One username per pair: optional `DOMAIN\` prefix plus the rendered core.
/// Usernames carry no domain suffix; the prefix is prepended verbatim.
pub fn generate_usernames(pairs: &[NamePair], config: &Config) -> Vec<String> {
    let prefix = match &config.directory_domain {
        Some(domain) => format!("{}\\", domain),
        None => String::new(),
    };
    pairs
        .iter()
        .map(|p| format!("{}{}", prefix, config.render(p, "")))
        .collect()
}
