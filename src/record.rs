//! Dictionary records, written as one JSON object per line.

use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::entries::Dictionary;
use crate::inflection::ConjugationTable;
use crate::irregular::Conjugations;
use crate::PartOfSpeech;

/// A single dictionary record.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Record<'a> {
    #[serde(rename = "r")]
    pub root: &'a str,
    #[serde(rename = "f")]
    pub forms: &'a str,
    #[serde(rename = "p")]
    pub pos: PartOfSpeech,
    #[serde(rename = "t")]
    pub translations: &'a str,
    /// Only present for verbs.
    #[serde(rename = "c", skip_serializing_if = "Option::is_none")]
    pub conjugation: Option<&'a ConjugationTable>,
}

/// Build records ordered by root and part of speech.
///
/// Every verb of the dictionary must have a conjugation.
pub fn records<'a>(
    dictionary: &'a Dictionary,
    conjugations: &'a Conjugations,
) -> Result<Vec<Record<'a>>> {
    let mut records = Vec::with_capacity(dictionary.len());

    for (root, pos, entry) in dictionary.iter() {
        let conjugation = match pos {
            PartOfSpeech::Verb => Some(
                conjugations
                    .get(root)
                    .with_context(|| format!("Missing conjugation for verb `{root}`"))?,
            ),
            _ => None,
        };

        records.push(Record {
            root,
            forms: &entry.forms,
            pos,
            translations: &entry.translations,
            conjugation,
        });
    }

    Ok(records)
}

/// Write records as JSON lines.
pub fn write_jsonl<W>(mut out: W, records: &[Record<'_>]) -> Result<()>
where
    W: Write,
{
    for record in records {
        serde_json::to_writer(&mut out, record)?;
        out.write_all(b"\n")?;
    }

    out.flush()?;
    Ok(())
}
