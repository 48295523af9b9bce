//! Irregular forms which replace regularly generated tenses.
//!
//! Overrides are applied in full before anything is validated, since an
//! override may arrive for a verb which has no regular table yet.

use std::collections::{BTreeMap, BTreeSet};
use std::io::BufRead;

use anyhow::{Context, Result};

use crate::inflection::{conjugate, ConjugationTable, SimpleTense};
use crate::reporter::Reporter;
use crate::Error;


/// A row of irregular forms, replacing one tense of one verb wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideEntry {
    pub infinitive: String,
    pub tense: SimpleTense,
    pub forms: Vec<String>,
}

impl OverrideEntry {
    /// Parse a row in the format `infinitive,TENSE,form/form/..`.
    pub fn parse(line: &str) -> Result<Self, Error> {
        let line = line.trim();
        let mut columns = line.split(',');

        let (Some(infinitive), Some(tense), Some(forms), None) = (
            columns.next(),
            columns.next(),
            columns.next(),
            columns.next(),
        ) else {
            return Err(Error::MalformedOverride(line.into()));
        };

        let Some(tense) = SimpleTense::parse(tense) else {
            return Err(Error::UnknownTense(tense.into()));
        };

        Ok(Self {
            infinitive: infinitive.to_owned(),
            tense,
            forms: forms.split('/').map(str::to_owned).collect(),
        })
    }
}

/// Load irregular forms, one row per line. Blank lines are skipped.
pub fn load_overrides<R>(reader: R) -> Result<Vec<OverrideEntry>>
where
    R: BufRead,
{
    let mut overrides = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;

        if line.trim().is_empty() {
            continue;
        }

        let entry = OverrideEntry::parse(&line).with_context(|| format!("line {}", index + 1))?;
        overrides.push(entry);
    }

    Ok(overrides)
}

/// Conjugation tables of a collection of verbs, keyed by infinitive.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Conjugations {
    tables: BTreeMap<String, ConjugationTable>,
    regular: BTreeSet<String>,
}

impl Conjugations {
    /// Construct an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Regularly conjugate every given verb.
    pub fn regular<I>(verbs: I) -> Result<Self, Error>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut this = Self::new();

        for verb in verbs {
            this.insert_regular(verb.as_ref())?;
        }

        Ok(this)
    }

    /// Generate the regular table of a verb, replacing any existing one.
    pub fn insert_regular(&mut self, infinitive: &str) -> Result<(), Error> {
        let table = conjugate(infinitive)?;
        self.tables.insert(infinitive.to_owned(), table);
        self.regular.insert(infinitive.to_owned());
        Ok(())
    }

    /// Apply overrides in order, later rows winning over earlier ones.
    ///
    /// An override for a verb without a regular table is reported, and still
    /// applied to a fresh table.
    pub fn apply<R>(&mut self, overrides: &[OverrideEntry], reporter: &R)
    where
        R: ?Sized + Reporter,
    {
        for entry in overrides {
            if !self.regular.contains(&entry.infinitive) {
                report_warn!(
                    reporter,
                    "Irregular forms found for missing verb {}",
                    entry.infinitive
                );
            }

            let table = self.tables.entry(entry.infinitive.clone()).or_default();
            table.insert(entry.tense, entry.forms.iter().cloned());
        }
    }

    /// Check every tense of every verb for the expected number of forms.
    pub fn validate(&self) -> Result<(), Error> {
        for (infinitive, table) in &self.tables {
            table.validate(infinitive)?;
        }

        Ok(())
    }

    /// Conjugate, apply overrides and validate in one go.
    pub fn merge<I, R>(verbs: I, overrides: &[OverrideEntry], reporter: &R) -> Result<Self, Error>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        R: ?Sized + Reporter,
    {
        let mut this = Self::regular(verbs)?;
        this.apply(overrides, reporter);
        this.validate()?;
        Ok(this)
    }

    /// Get the table of a verb.
    pub fn get(&self, infinitive: &str) -> Option<&ConjugationTable> {
        self.tables.get(infinitive)
    }

    /// Number of verbs.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Test if there are no verbs.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Iterate over verbs ordered by infinitive.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConjugationTable)> + '_ {
        self.tables
            .iter()
            .map(|(infinitive, table)| (infinitive.as_str(), table))
    }
}
