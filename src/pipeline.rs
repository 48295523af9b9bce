//! The full dictionary build, from annotated inputs to written records.

use std::fs::File;
use std::io::BufWriter;

use anyhow::{anyhow, bail, Context, Result};

use crate::config::{required, BuildConfig};
use crate::entries::{load_deletions, load_modifications, Annotations};
use crate::input;
use crate::irregular::{load_overrides, Conjugations};
use crate::record::{records, write_jsonl};
use crate::reporter::Reporter;

/// Build the dictionary described by `config`, returning the number of
/// records written.
pub fn build<R>(config: &BuildConfig, reporter: &R) -> Result<usize>
where
    R: ?Sized + Reporter,
{
    if config.annotated.is_empty() {
        bail!("At least one annotated input is required");
    }

    let modifications_path = required(&config.modifications, "modifications")?;
    let deletions_path = required(&config.deletions, "deletions")?;
    let irregular_path = required(&config.irregular_verbs, "irregular-verbs")?;
    let output_path = required(&config.output, "output")?;

    let mut annotations = Annotations::new();

    for path in &config.annotated {
        annotations
            .add(input::open(path)?)
            .with_context(|| anyhow!("{}", path.display()))?;
    }

    let mut entries = annotations.entries(config.min_count)?;
    report_info!(reporter, "Loaded {} unique (root, pos) entries", entries.len());

    let modifications = load_modifications(input::open(modifications_path)?)
        .with_context(|| anyhow!("{}", modifications_path.display()))?;
    report_info!(reporter, "Loaded {} modifications", modifications.len());

    let deletions = load_deletions(input::open(deletions_path)?)
        .with_context(|| anyhow!("{}", deletions_path.display()))?;
    report_info!(reporter, "Loaded {} deletions", deletions.len());

    entries.extend(modifications);

    for (root, pos) in &deletions {
        entries.remove(root, *pos);
    }

    let dictionary = entries.filter()?;

    let overrides = load_overrides(input::open(irregular_path)?)
        .with_context(|| anyhow!("{}", irregular_path.display()))?;

    let verbs = dictionary.verbs().collect::<Vec<_>>();
    report_info!(reporter, "Generating conjugations for {} verbs", verbs.len());

    let conjugations = Conjugations::merge(verbs, &overrides, reporter)?;
    report_info!(
        reporter,
        "After filtering and modifications, {} entries remain",
        dictionary.len()
    );

    let records = records(&dictionary, &conjugations)?;

    let out = File::create(output_path).with_context(|| anyhow!("{}", output_path.display()))?;
    write_jsonl(BufWriter::new(out), &records)
        .with_context(|| anyhow!("{}", output_path.display()))?;

    report_info!(reporter, "Wrote {}", output_path.display());
    Ok(records.len())
}
