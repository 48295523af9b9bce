//! Dictionary entries, merged from annotated word lists and curated edits.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::io::BufRead;

use anyhow::{anyhow, bail, Context, Result};

use crate::PartOfSpeech;


/// Prefix of header lines which older annotation runs emitted.
const HEADER_PREFIX: &str = "word,root,";

/// The data of a single entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Canonical forms, joined by `/`.
    pub forms: String,
    /// Translations, joined by `/`.
    pub translations: String,
}

/// Counts identical annotation lines across any number of inputs.
///
/// An annotation line is `word,root,pos,gender,number,tense,person,translation`.
#[derive(Default)]
pub struct Annotations {
    counts: HashMap<String, usize>,
}

impl Annotations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every line of the given input.
    pub fn add<R>(&mut self, reader: R) -> Result<()>
    where
        R: BufRead,
    {
        for line in reader.lines() {
            let line = line?;

            if line.trim().is_empty() {
                continue;
            }

            *self.counts.entry(line.trim().to_owned()).or_default() += 1;
        }

        Ok(())
    }

    /// Group lines seen at least `min_count` times into entries keyed by
    /// `(root, pos)`.
    pub fn entries(&self, min_count: usize) -> Result<Entries> {
        let mut forms = BTreeMap::<(String, String), BTreeSet<(&str, &str, &str)>>::new();
        let mut translations = BTreeMap::<(String, String), BTreeSet<&str>>::new();

        for (line, &count) in &self.counts {
            if count < min_count || line.starts_with(HEADER_PREFIX) {
                continue;
            }

            let columns = line.split(',').collect::<Vec<_>>();

            let &[word, root, pos, gender, number, _tense, _person, translation] = &columns[..]
            else {
                bail!(
                    "Invalid annotation `{line}`, expected 8 columns but got {}",
                    columns.len()
                );
            };

            let key = (root.to_owned(), pos.to_owned());
            forms
                .entry(key.clone())
                .or_default()
                .insert((gender, number, word));
            translations.entry(key).or_default().insert(translation);
        }

        let mut entries = Entries::new();

        for (key, set) in forms {
            let mut set = set.into_iter().collect::<Vec<_>>();
            set.sort_by_key(|&(gender, number, _)| form_order(gender, number));

            let joined_forms = set
                .iter()
                .map(|&(_, _, word)| word)
                .collect::<Vec<_>>()
                .join("/");

            let joined_translations = translations
                .get(&key)
                .map(|t| t.iter().copied().collect::<Vec<_>>().join("/"))
                .unwrap_or_default();

            let (root, pos) = key;

            entries.insert(
                root,
                pos,
                Entry {
                    forms: joined_forms,
                    translations: joined_translations,
                },
            );
        }

        Ok(entries)
    }
}

/// Order forms as m.sg, f.sg, m.pl, f.pl and then everything else.
fn form_order(gender: &str, number: &str) -> u8 {
    match (gender, number) {
        ("m", "sg") => 0,
        (_, "sg") => 1,
        ("m", _) => 2,
        _ => 3,
    }
}

/// Entries keyed by `(root, pos)`, where the part of speech is not yet
/// validated.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Entries {
    entries: BTreeMap<(String, String), Entry>,
}

impl Entries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, replacing any existing one.
    pub fn insert(&mut self, root: String, pos: String, entry: Entry) -> Option<Entry> {
        self.entries.insert((root, pos), entry)
    }

    /// Replace or add every entry of `other`.
    pub fn extend(&mut self, other: Entries) {
        self.entries.extend(other.entries);
    }

    /// Remove an entry.
    pub fn remove(&mut self, root: &str, pos: PartOfSpeech) -> Option<Entry> {
        self.entries.remove(&(root.to_owned(), pos.ident().to_owned()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop entries which shouldn't be part of the dictionary, validating the
    /// part of speech of the rest.
    pub fn filter(self) -> Result<Dictionary> {
        let mut entries = BTreeMap::new();

        for ((root, pos), entry) in self.entries {
            if matches!(pos.as_str(), "num" | "part") {
                continue;
            }

            let Some(part) = PartOfSpeech::parse_keyword(&pos) else {
                bail!("Invalid part of speech `{pos}` found with `{root}`");
            };

            if matches!(part, PartOfSpeech::Other | PartOfSpeech::Unknown) {
                continue;
            }

            if !root.starts_with(is_root_start) {
                tracing::trace!(root = %root, %part, "excluding");
                continue;
            }

            entries.insert((root, part), entry);
        }

        Ok(Dictionary { entries })
    }
}

fn is_root_start(c: char) -> bool {
    matches!(c, 'a'..='z' | 'à' | 'è' | 'ì' | 'ò' | 'ù' | 'é' | '\'')
}

/// Filtered entries, ordered by root and then part of speech.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Dictionary {
    entries: BTreeMap<(String, PartOfSpeech), Entry>,
}

impl Dictionary {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the roots of every verb.
    pub fn verbs(&self) -> impl Iterator<Item = &str> + '_ {
        self.iter()
            .filter(|(_, pos, _)| *pos == PartOfSpeech::Verb)
            .map(|(root, _, _)| root)
    }

    /// Iterate over every entry.
    pub fn iter(&self) -> impl Iterator<Item = (&str, PartOfSpeech, &Entry)> + '_ {
        self.entries
            .iter()
            .map(|((root, pos), entry)| (root.as_str(), *pos, entry))
    }
}

/// Load modifications, one `root,forms,pos,translations,<note>` row per line.
pub fn load_modifications<R>(reader: R) -> Result<Entries>
where
    R: BufRead,
{
    let mut entries = Entries::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        let columns = line.split(',').collect::<Vec<_>>();

        let &[root, forms, pos, translations, _] = &columns[..] else {
            bail!("Invalid modifications row `{line}` on line {}", index + 1);
        };

        if PartOfSpeech::parse_keyword(pos).is_none() {
            bail!("Invalid modifications row `{line}` on line {}", index + 1);
        }

        let entry = Entry {
            forms: forms.to_owned(),
            translations: translations.to_owned(),
        };

        if let Some(existing) = entries.entries.get(&(root.to_owned(), pos.to_owned())) {
            return Err(anyhow!(
                "Duplicate modifications for ({root}, {pos}): {entry:?} and {existing:?}"
            ));
        }

        entries.insert(root.to_owned(), pos.to_owned(), entry);
    }

    Ok(entries)
}

/// Load deletions, one `root,pos` row per line.
pub fn load_deletions<R>(reader: R) -> Result<Vec<(String, PartOfSpeech)>>
where
    R: BufRead,
{
    let mut deletions = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        let (root, pos) = line
            .split_once(',')
            .filter(|(_, pos)| !pos.contains(','))
            .with_context(|| anyhow!("Invalid deletions row `{line}` on line {}", index + 1))?;

        let pos = PartOfSpeech::parse_keyword(pos)
            .with_context(|| anyhow!("Invalid deletions row `{line}` on line {}", index + 1))?;

        deletions.push((root.to_owned(), pos));
    }

    Ok(deletions)
}
