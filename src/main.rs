use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use engita::config::BuildConfig;
use engita::irregular::load_overrides;
use engita::reporter::TracingReporter;
use engita::{input, pipeline, Conjugations, PartOfSpeech};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print every simple tense of the given verbs.
    Conjugate(ConjugateArgs),
    /// Build the dictionary from annotated word lists.
    Build(BuildArgs),
    /// List available parts of speech.
    ListPos,
}

#[derive(clap::Args)]
struct ConjugateArgs {
    /// Irregular forms to apply on top of the regular conjugation.
    #[arg(long)]
    irregular_verbs: Option<PathBuf>,
    /// Infinitives to conjugate.
    #[arg(required = true)]
    verbs: Vec<String>,
}

#[derive(clap::Args)]
struct BuildArgs {
    /// Load build configuration from the given TOML file. Other arguments
    /// override what it specifies.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Modifications as csv with columns root,forms,pos,translations,note.
    #[arg(long)]
    modifications: Option<PathBuf>,
    /// Deletions as csv with columns root,pos.
    #[arg(long)]
    deletions: Option<PathBuf>,
    /// Irregular verbs as csv with columns infinitive,simple_tense,form/form/...
    #[arg(long)]
    irregular_verbs: Option<PathBuf>,
    /// Where to write the dictionary.
    #[arg(long)]
    output: Option<PathBuf>,
    /// Minimum occurrences in annotations for a (root, pos) to be included.
    #[arg(long)]
    min_count: Option<usize>,
    /// Annotated word lists.
    annotated: Vec<PathBuf>,
}

fn main() -> Result<()> {
    let filter = EnvFilter::builder().from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish()
        .try_init()?;

    let args = Args::try_parse()?;

    match args.command {
        Command::Conjugate(args) => conjugate(args),
        Command::Build(args) => build(args),
        Command::ListPos => {
            for pos in PartOfSpeech::VALUES {
                println!("{} - {}", pos.ident(), pos.help());
            }

            Ok(())
        }
    }
}

fn conjugate(args: ConjugateArgs) -> Result<()> {
    let mut overrides = match &args.irregular_verbs {
        Some(path) => load_overrides(input::open(path)?)
            .with_context(|| format!("{}", path.display()))?,
        None => Vec::new(),
    };

    overrides.retain(|entry| args.verbs.contains(&entry.infinitive));

    let conjugations = Conjugations::merge(&args.verbs, &overrides, &TracingReporter)?;

    for verb in &args.verbs {
        let Some(table) = conjugations.get(verb) else {
            continue;
        };

        println!("{verb}:");

        for (tense, forms) in table.iter() {
            println!("  {}:", tense.title());

            for form in forms {
                println!("    {form}");
            }
        }
    }

    Ok(())
}

fn build(args: BuildArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => BuildConfig::load(path)?,
        None => BuildConfig::default(),
    };

    if !args.annotated.is_empty() {
        config.annotated = args.annotated;
    }

    config.modifications = args.modifications.or(config.modifications);
    config.deletions = args.deletions.or(config.deletions);
    config.irregular_verbs = args.irregular_verbs.or(config.irregular_verbs);
    config.output = args.output.or(config.output);

    if let Some(min_count) = args.min_count {
        config.min_count = min_count;
    }

    let start = Instant::now();
    let count = pipeline::build(&config, &TracingReporter)?;

    let duration = Instant::now().duration_since(start);
    tracing::info!(count, ?duration);
    Ok(())
}
