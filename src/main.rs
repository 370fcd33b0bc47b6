//! CLI binary for termbase.

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use termbase::{
    ARA, ENG, FRA, GlossarySearch, InMemoryProvider, SearchConfig, SearchProvider, aggregate,
    normalize,
};
use tracing_subscriber::EnvFilter;

/// Termbase: cluster Arabic glossary matches by normalized headword.
#[derive(Parser)]
#[command(name = "termbase", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Aggregate match records (a JSON array, or a search response with
    /// `results`) and print the ranked groups.
    Aggregate {
        /// Input file. Reads stdin when omitted.
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Run a query against a record file through the search service.
    Search {
        /// Record file served as the term store.
        #[arg(short, long)]
        input: PathBuf,

        /// JSON search configuration.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the flat match list instead of groups.
        #[arg(long)]
        raw: bool,

        query: String,
    },

    /// Print the normalized form of TEXT.
    Normalize {
        #[arg(short, long, value_enum)]
        script: ScriptArg,

        text: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ScriptArg {
    Arabic,
    English,
    French,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries JSON only.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("termbase=info")),
        )
        .with_writer(io::stderr)
        .init();

    match Cli::parse().command {
        Command::Aggregate { input } => run_aggregate(input.as_deref()),
        Command::Search {
            input,
            config,
            raw,
            query,
        } => run_search(&input, config.as_deref(), raw, &query),
        Command::Normalize { script, text } => {
            let script = match script {
                ScriptArg::Arabic => ARA,
                ScriptArg::English => ENG,
                ScriptArg::French => FRA,
            };
            println!("{}", normalize(script, &text));
            Ok(())
        }
    }
}

fn run_aggregate(input: Option<&Path>) -> anyhow::Result<()> {
    let provider = load_records(input)?;
    let records = provider.fetch_matches("")?;
    let clusters = aggregate(&records)?;
    println!("{}", serde_json::to_string_pretty(&clusters)?);
    Ok(())
}

fn run_search(input: &Path, config: Option<&Path>, raw: bool, query: &str) -> anyhow::Result<()> {
    let config = match config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str::<SearchConfig>(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => SearchConfig::default(),
    };
    let search = GlossarySearch::new(load_records(Some(input))?, config)?;

    let out = if raw {
        serde_json::to_string_pretty(&search.search_raw(query)?)?
    } else {
        serde_json::to_string_pretty(&search.search_aggregated(query)?)?
    };
    println!("{out}");
    Ok(())
}

fn load_records(input: Option<&Path>) -> anyhow::Result<InMemoryProvider> {
    let text = match input {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            buf
        }
    };
    InMemoryProvider::from_json(&text).context("input is not a JSON record list")
}
