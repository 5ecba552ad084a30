//! ttiboard CLI: rank, history and validate commands.
//!
//! Commands:
//! - `rank`: print the provider ranking for a results file (text or JSON)
//! - `history`: print the median TTI history, optionally for one provider
//! - `validate`: load and contract-check results and history files

use std::fmt::Write as _;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use ttiboard_core::{
    format_ms, format_ratio, format_seconds, known_providers, load_history, load_results,
    partition_and_rank, DisplayAssets, HistoryDataPoint, ProviderResult, Ranking, SortKey,
};

#[derive(Parser)]
#[command(
    name = "ttiboard",
    about = "ttiboard CLI: sandbox time-to-interactive benchmark rankings"
)]
struct Cli {
    /// Log at debug level (TTIBOARD_LOG overrides).
    #[arg(long, short, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank providers by a summary statistic.
    Rank {
        /// Results JSON file or directory of JSON files.
        #[arg(long)]
        results: PathBuf,

        /// Statistic to rank by: min, max, median, p95, p99, avg.
        #[arg(long, default_value = "median")]
        sort: SortKey,

        /// Slowest first.
        #[arg(long, default_value_t = false)]
        desc: bool,

        /// Emit the ranking as JSON.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print the median TTI history.
    History {
        /// History JSON file.
        #[arg(long)]
        history: PathBuf,

        /// Only this provider (case-insensitive).
        #[arg(long)]
        provider: Option<String>,
    },
    /// Load and validate input files.
    Validate {
        /// Results JSON file or directory of JSON files.
        #[arg(long)]
        results: PathBuf,

        /// History JSON file.
        #[arg(long)]
        history: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_env("TTIBOARD_LOG").unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    match cli.command {
        Commands::Rank {
            results,
            sort,
            desc,
            json,
        } => run_rank(&results, sort, !desc, json),
        Commands::History { history, provider } => run_history(&history, provider.as_deref()),
        Commands::Validate { results, history } => run_validate(&results, history.as_deref()),
    }
}

fn run_rank(path: &Path, key: SortKey, ascending: bool, json: bool) -> Result<()> {
    let results = load_results(path)
        .with_context(|| format!("failed to load results from {}", path.display()))?;
    let ranking = partition_and_rank(&results, key, ascending);
    tracing::debug!(%key, ascending, active = ranking.active.len(), "ranked results");

    if json {
        let out = serde_json::to_string_pretty(&ranking).context("failed to encode ranking")?;
        println!("{out}");
    } else {
        print!("{}", render_ranking(&ranking, &DisplayAssets::builtin()));
    }
    Ok(())
}

fn run_history(path: &Path, provider: Option<&str>) -> Result<()> {
    let history = load_history(path)
        .with_context(|| format!("failed to load history from {}", path.display()))?;
    let providers = match provider {
        Some(p) => vec![p.to_string()],
        None => known_providers(&[], &history),
    };
    print!("{}", render_history(&history, &providers, &DisplayAssets::builtin()));
    Ok(())
}

fn run_validate(results: &Path, history: Option<&Path>) -> Result<()> {
    let loaded = load_results(results)
        .with_context(|| format!("invalid results in {}", results.display()))?;
    let active = loaded.iter().filter(|r| r.is_active()).count();
    println!(
        "results ok: {} providers ({} active, {} inactive)",
        loaded.len(),
        active,
        loaded.len() - active
    );

    if let Some(path) = history {
        let points = load_history(path)
            .with_context(|| format!("invalid history in {}", path.display()))?;
        println!(
            "history ok: {} points, {} providers",
            points.len(),
            known_providers(&loaded, &points).len()
        );
    }
    Ok(())
}

fn render_ranking(ranking: &Ranking<'_>, assets: &DisplayAssets) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>4}  {:<20} {:>8} {:>8} {:>8} {:>8} {:>8} {:>8} {:>5}",
        "#", "Provider", "Min", "Max", "Median", "P95", "P99", "Avg", "OK%"
    );
    let leader = ranking.leader().map(|row| row.rank);
    for row in &ranking.active {
        let marker = if leader == Some(row.rank) { "*" } else { " " };
        let _ = write!(
            out,
            "{:>3}{marker}  {:<20}",
            row.rank,
            assets.display_name(&row.result.provider)
        );
        if let Some(summary) = &row.result.summary {
            for (_, value) in summary.fields() {
                let _ = write!(out, " {:>8}", format_ms(value));
            }
        }
        let _ = writeln!(out, " {:>5}", ratio_text(row.result, row.success_ratio));
    }
    for row in &ranking.inactive {
        let _ = writeln!(
            out,
            "{:>4}  {:<20} {}",
            "-",
            assets.display_name(&row.result.provider),
            row.reason
        );
    }
    out
}

/// `–` when no iterations were recorded, matching the TUI table.
fn ratio_text(result: &ProviderResult, ratio: f64) -> String {
    if result.iterations.is_some() {
        format_ratio(ratio)
    } else {
        "–".to_string()
    }
}

fn render_history(
    history: &[HistoryDataPoint],
    providers: &[String],
    assets: &DisplayAssets,
) -> String {
    let mut out = String::new();
    let _ = write!(out, "{:<12}", "date");
    for provider in providers {
        let _ = write!(out, " {:>12}", assets.display_name(provider));
    }
    out.push('\n');
    for point in history {
        let _ = write!(out, "{:<12}", point.date);
        for provider in providers {
            let cell = point
                .value_for(provider)
                .map(format_seconds)
                .unwrap_or_else(|| "-".to_string());
            let _ = write!(out, " {cell:>12}");
        }
        out.push('\n');
    }
    out
}
