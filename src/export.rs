//! Output formatters: Gophish import CSV and plain identifier lists.
//!
//! Both writers take an already-open sink so the binary can create the
//! output file before any input processing starts. Identifiers pass through
//! the character normalizer on the way out; the First/Last Name CSV columns
//! are written verbatim.
use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use crate::name::NamePair;
use crate::normalize::transliterate;

#[derive(Debug, Serialize)]
struct GophishRow<'a> {
    #[serde(rename = "First Name")]
    first_name: &'a str,
    #[serde(rename = "Last Name")]
    last_name: &'a str,
    #[serde(rename = "Position")]
    position: &'a str,
    #[serde(rename = "Email")]
    email: &'a str,
}

/// Write the Gophish user-import CSV: header row plus one row per pair with
/// an always-empty Position column. The header is written even when there
/// are no pairs.
pub fn write_gophish_csv<W: Write>(pairs: &[NamePair], emails: &[String], sink: W) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(sink);
    wtr.write_record(["First Name", "Last Name", "Position", "Email"])?;
    for (pair, email) in pairs.iter().zip(emails) {
        wtr.serialize(GophishRow {
            first_name: &pair.first,
            last_name: &pair.last,
            position: "",
            email: &transliterate(email),
        })?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write one identifier per line, no header. Used for both the `emails` and
/// `usernames` output modes.
pub fn write_simple_list<W: Write>(identifiers: &[String], mut sink: W) -> Result<()> {
    for id in identifiers {
        writeln!(sink, "{}", transliterate(id))?;
    }
    Ok(())
}
