//! `insight` command-line interface.
//!
//! Results go to stdout; tracing output goes to stderr (`RUST_LOG`
//! controls the level, default `info`).

use clap::{Parser, Subcommand, ValueEnum};
use insight::search::{
    CosineSummariser, DuckDuckGoEngine, HttpFetcher, PageSummary, SearchConfig, SummaryConfig,
    TextInsight, WindowSummariser,
};
use insight::{Segment, find_overlap};
use std::cmp::Ordering;

#[derive(Parser, Debug)]
#[command(
    name = "insight",
    version,
    about = "Segment overlap, version ordering and web page summaries"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check whether any two segments overlap (boundaries inclusive).
    Overlap {
        /// Segments written as `start,end`, e.g. `1,5 4,8`.
        #[arg(required = true, allow_hyphen_values = true)]
        segments: Vec<String>,

        /// Also print the indices of an overlapping pair.
        #[arg(short, long)]
        verbose: bool,
    },

    /// Compare two version strings; prints -1, 0 or 1.
    Compare {
        v1: String,
        v2: String,

        /// Separator for both versions (or only the first when --sep2 is given).
        #[arg(long, default_value_t = '.')]
        sep: char,

        /// Separator for the second version.
        #[arg(long)]
        sep2: Option<char>,
    },

    /// Search the web and summarise the top results.
    Summarize {
        query: String,

        /// Number of search results to summarise.
        #[arg(short = 'n', long, default_value_t = 5)]
        top_n: usize,

        /// Sentences kept per page.
        #[arg(short, long, default_value_t = 3)]
        sentences: usize,

        #[arg(long, value_enum, default_value_t = SummariserKind::Cosine)]
        summariser: SummariserKind,

        /// Pages fetched at once.
        #[arg(long, default_value_t = 1)]
        concurrency: usize,

        /// HTTP timeout in seconds.
        #[arg(long, default_value_t = 8)]
        timeout: u64,

        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SummariserKind {
    /// TF-IDF cosine similarity to the query.
    Cosine,
    /// Context windows around query terms.
    Window,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    match Cli::parse().command {
        Command::Overlap { segments, verbose } => run_overlap(&segments, verbose),
        Command::Compare { v1, v2, sep, sep2 } => run_compare(&v1, &v2, sep, sep2),
        Command::Summarize {
            query,
            top_n,
            sentences,
            summariser,
            concurrency,
            timeout,
            json,
        } => {
            let search_config = SearchConfig {
                timeout_seconds: timeout,
                ..Default::default()
            };
            let summary_config = SummaryConfig {
                sentences_per_page: sentences,
                max_concurrent_fetches: concurrency,
                ..Default::default()
            };
            let summaries = match summariser {
                SummariserKind::Cosine => {
                    let summariser = CosineSummariser::default();
                    summarize(&query, top_n, search_config, summary_config, summariser).await?
                }
                SummariserKind::Window => {
                    let summariser = WindowSummariser::default();
                    summarize(&query, top_n, search_config, summary_config, summariser).await?
                }
            };
            print_summaries(&summaries, json)
        }
    }
}

fn run_overlap(raw: &[String], verbose: bool) -> anyhow::Result<()> {
    let segments = raw
        .iter()
        .map(|s| s.parse::<Segment>())
        .collect::<Result<Vec<_>, _>>()?;

    match find_overlap(&segments) {
        Some((i, j)) => {
            println!("true");
            if verbose {
                println!("{i}: {} overlaps {j}: {}", segments[i], segments[j]);
            }
        }
        None => println!("false"),
    }
    Ok(())
}

fn run_compare(v1: &str, v2: &str, sep: char, sep2: Option<char>) -> anyhow::Result<()> {
    let ordering = insight::compare_with_separators(v1, sep, v2, sep2.unwrap_or(sep))?;
    let code = match ordering {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    };
    println!("{code}");
    Ok(())
}

async fn summarize<S: insight::search::Summariser>(
    query: &str,
    top_n: usize,
    search_config: SearchConfig,
    summary_config: SummaryConfig,
    summariser: S,
) -> anyhow::Result<Vec<PageSummary>> {
    let fetcher = HttpFetcher::new(&search_config)?;
    let insight = TextInsight::new(DuckDuckGoEngine::new(search_config), fetcher, summariser)
        .with_config(summary_config);

    insight.summarize(query, top_n).await.map_err(|e| {
        tracing::error!(error = %e, "summarize failed");
        anyhow::anyhow!("summarize failed: {e}")
    })
}

fn print_summaries(summaries: &[PageSummary], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(summaries)?);
        return Ok(());
    }

    for summary in summaries {
        println!("{}. {}", summary.rank, summary.url);
        if !summary.title.is_empty() {
            println!("   {}", summary.title);
        }
        if summary.is_empty() {
            println!("   (no extractable sentences)");
        }
        for sentence in &summary.sentences {
            println!("   [{:.3}] {}", sentence.score, sentence.text);
        }
        println!();
    }
    Ok(())
}
