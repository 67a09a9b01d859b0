use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;
use tracing::{info, warn};

use robench_leaderboard::input::{InputError, load_document, load_version};
use robench_leaderboard::logging::init_logging;
use robench_leaderboard::model::{BenchmarkProfile, BenchmarkVersion, Construct, ProfileError};
use robench_leaderboard::pipeline::run_engine;
use robench_leaderboard::pipeline::stage3_aggregate::{filter_summaries, flatten_results};
use robench_leaderboard::pipeline::stage4_radar::project_radar;
use robench_leaderboard::pipeline::stage5_report::{Stage5Input, write_reports};
use robench_leaderboard::report::json::{render_flat_json, render_rows_json, render_series_json};
use robench_leaderboard::report::text::{render_flat_text, render_table_text};
use robench_leaderboard::report::view::{LeaderboardView, SortKey};
use robench_leaderboard::scenarios::canonical_index;

#[derive(Debug, Error)]
enum RunError {
    #[error(transparent)]
    Profile(#[from] ProfileError),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(
    name = "robench-leaderboard",
    version,
    about = "Decode RoBench SCP results into leaderboard tables, radar series and reports"
)]
struct Cli {
    /// -v for info, -vv for debug; RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write leaderboard.tsv, scenarios.tsv, radar.json, summary.json and report.txt
    Run {
        #[command(flatten)]
        source: SourceArgs,
        #[command(flatten)]
        view: ViewArgs,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print the leaderboard table
    Table {
        #[command(flatten)]
        source: SourceArgs,
        #[command(flatten)]
        view: ViewArgs,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print radar series for one construct as JSON
    Radar {
        #[command(flatten)]
        source: SourceArgs,
        #[arg(long, value_parser = parse_construct)]
        construct: Construct,
    },
    /// Print key-agnostic rows (mean accuracy over every key) for one result file
    Flat {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Args, Debug, Clone)]
struct SourceArgs {
    /// Directory holding <version>.json or <version>.json.gz documents
    #[arg(long)]
    data_dir: PathBuf,
    #[arg(long, value_parser = parse_version, default_value = "2024b")]
    benchmark: BenchmarkVersion,
    /// JSON benchmark profile; replaces the built-in profile of --benchmark
    #[arg(long)]
    profile: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
struct ViewArgs {
    /// Restrict to one scenario id, e.g. `math`
    #[arg(long)]
    scenario: Option<String>,
    #[arg(long, value_parser = parse_sort, default_value = "avg_overall")]
    sort: SortKey,
    #[arg(long, default_value = "")]
    search: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn parse_version(s: &str) -> Result<BenchmarkVersion, String> {
    BenchmarkVersion::from_tag(s).ok_or_else(|| {
        let known = BenchmarkVersion::all()
            .iter()
            .map(|v| v.tag())
            .collect::<Vec<_>>()
            .join("|");
        format!("unknown benchmark version {s:?} (use {known})")
    })
}

fn parse_sort(s: &str) -> Result<SortKey, String> {
    SortKey::from_name(s)
        .ok_or_else(|| format!("invalid sort key {s:?} (use avg_s|avg_c|avg_p|avg_overall)"))
}

fn parse_construct(s: &str) -> Result<Construct, String> {
    Construct::from_code(&s.trim().to_ascii_lowercase())
        .ok_or_else(|| format!("invalid construct {s:?} (use s|c|p)"))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<(), RunError> {
    match command {
        Command::Run { source, view, out } => {
            let profile = resolve_profile(&source)?;
            let document = load_version(&source.data_dir, &profile);
            let engine = run_engine(&document, &profile)?;
            let leaderboard = LeaderboardView::new(view.sort, &view.search);
            let scenario = checked_scenario(&profile, view.scenario.as_deref());
            let summaries = match scenario {
                Some(id) => filter_summaries(&engine.summaries, id),
                None => engine.summaries.clone(),
            };
            let input = Stage5Input {
                profile: &profile,
                rows: leaderboard.apply(&summaries),
                version_summary: &engine.version_summary,
                radar: &engine.radar,
                view: &leaderboard,
                scenario_filter: scenario,
                tool_name: env!("CARGO_PKG_NAME").to_string(),
                tool_version: env!("CARGO_PKG_VERSION").to_string(),
            };
            write_reports(&input, &out)?;
        }
        Command::Table {
            source,
            view,
            format,
        } => {
            let profile = resolve_profile(&source)?;
            let document = load_version(&source.data_dir, &profile);
            let engine = run_engine(&document, &profile)?;
            let leaderboard = LeaderboardView::new(view.sort, &view.search);
            let summaries = match checked_scenario(&profile, view.scenario.as_deref()) {
                Some(id) => filter_summaries(&engine.summaries, id),
                None => engine.summaries,
            };
            let rows = leaderboard.apply(&summaries);
            match format {
                OutputFormat::Text => print!("{}", render_table_text(&rows)),
                OutputFormat::Json => println!("{}", render_rows_json(&rows)?),
            }
        }
        Command::Radar { source, construct } => {
            let profile = resolve_profile(&source)?;
            let document = load_version(&source.data_dir, &profile);
            let engine = run_engine(&document, &profile)?;
            let series = project_radar(&engine.taxonomies, &profile.scenarios, construct);
            println!("{}", render_series_json(&series)?);
        }
        Command::Flat {
            input,
            search,
            format,
        } => {
            let document = load_document(&input)?;
            let view = LeaderboardView::new(SortKey::AvgOverall, &search);
            let all = flatten_results(&document);
            let mut rows = all.iter().filter(|r| view.matches(&r.model)).collect::<Vec<_>>();
            rows.sort_by(|a, b| b.avg.partial_cmp(&a.avg).unwrap_or(std::cmp::Ordering::Equal));
            match format {
                OutputFormat::Text => print!("{}", render_flat_text(&rows)),
                OutputFormat::Json => println!("{}", render_flat_json(&rows)?),
            }
        }
    }
    Ok(())
}

fn resolve_profile(source: &SourceArgs) -> Result<BenchmarkProfile, RunError> {
    match &source.profile {
        Some(path) => {
            let profile = BenchmarkProfile::from_json_file(path)?;
            info!(
                path = %path.display(),
                version = %profile.version,
                "using benchmark profile from file"
            );
            Ok(profile)
        }
        None => Ok(BenchmarkProfile::builtin(source.benchmark)),
    }
}

fn checked_scenario<'a>(profile: &BenchmarkProfile, scenario: Option<&'a str>) -> Option<&'a str> {
    let id = scenario?;
    if canonical_index(&profile.scenarios, id).is_none() {
        warn!(
            scenario = id,
            version = %profile.version,
            "scenario is not in the canonical list for this benchmark version"
        );
    }
    Some(id)
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
