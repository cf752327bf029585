use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use dotenvy::dotenv;
use jb_common::{
    board::JobBoard,
    config::{BoardConfig, ConfigError},
    logging::{init_tracing_subscriber, install_tracing_panic_hook},
    matching::filter::{FilterCriteria, StatusFilter},
    profile::profile_completeness,
    source::{FixtureSource, JobSource, JsonFileSource, ProfileSource},
    IntRange, JobId,
};
use serde::Serialize;
use tracing::{info, warn};

const APP_NAME: &str = "jb-cli";

#[derive(Debug, Parser)]
#[command(name = "jb-cli", about = "Search and recommend jobs from a job board data source")]
struct Cli {
    /// JSON array of job postings (defaults to the bundled fixtures)
    #[arg(long, env = "JB_JOBS_PATH", global = true)]
    jobs: Option<PathBuf>,

    /// Listing page size (overrides JB_PAGE_SIZE, default 6)
    #[arg(long, global = true)]
    page_size: Option<usize>,

    /// Maximum number of entries in the recent bucket (overrides JB_RECENT_LIMIT, default 10)
    #[arg(long, global = true)]
    recent_limit: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Filter the listing and print one page
    Search(SearchArgs),
    /// Score every job against a candidate profile and print the buckets
    Recommend(RecommendArgs),
    /// Print job counts per status
    Stats,
}

#[derive(Debug, Args)]
struct SearchArgs {
    /// Case-insensitive match on title or tags
    #[arg(long, default_value = "")]
    keyword: String,

    /// Case-insensitive substring of the company name
    #[arg(long, default_value = "")]
    company: String,

    #[arg(long)]
    category: Option<String>,

    #[arg(long)]
    industry: Option<String>,

    /// Location substring, or "Remote" to match every job
    #[arg(long)]
    location: Option<String>,

    /// Age range as LOW-HIGH (default 20-65)
    #[arg(long, value_parser = parse_range)]
    age: Option<IntRange>,

    /// Salary range as LOW-HIGH (default 300-1500)
    #[arg(long, value_parser = parse_range)]
    salary: Option<IntRange>,

    /// Drop the default age and salary ranges
    #[arg(long, conflicts_with_all = ["age", "salary"])]
    any_range: bool,

    /// Tag filter; repeat for OR semantics
    #[arg(long = "tag")]
    tags: Vec<String>,

    /// all | active | closed | draft
    #[arg(long, default_value = "all")]
    status: StatusFilter,

    #[arg(long, default_value_t = 1)]
    page: usize,
}

#[derive(Debug, Args)]
struct RecommendArgs {
    /// Candidate profile JSON (defaults to the bundled profile)
    #[arg(long, env = "JB_PROFILE_PATH")]
    profile: Option<PathBuf>,

    /// Toggle the favorite flag of a job before bucketing; repeatable
    #[arg(long = "toggle-favorite", value_parser = parse_job_id)]
    toggle_favorite: Vec<JobId>,
}

fn parse_range(raw: &str) -> Result<IntRange, String> {
    let (low, high) = raw
        .split_once('-')
        .ok_or_else(|| format!("expected LOW-HIGH, got {raw:?}"))?;
    let low: i64 = low.trim().parse().map_err(|_| format!("invalid low bound {low:?}"))?;
    let high: i64 = high
        .trim()
        .parse()
        .map_err(|_| format!("invalid high bound {high:?}"))?;
    if low > high {
        return Err(format!("low bound {low} exceeds high bound {high}"));
    }
    Ok(IntRange::new(low, high))
}

fn parse_job_id(raw: &str) -> Result<JobId, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err("job id must not be empty".into());
    }
    Ok(raw
        .parse::<i64>()
        .map(JobId::Int)
        .unwrap_or_else(|_| JobId::Text(raw.to_string())))
}

impl SearchArgs {
    fn criteria(&self) -> FilterCriteria {
        let defaults = if self.any_range {
            FilterCriteria::default()
        } else {
            FilterCriteria::sidebar_defaults()
        };

        FilterCriteria {
            keyword: self.keyword.clone(),
            company_name: self.company.clone(),
            job_category: self.category.clone(),
            industry: self.industry.clone(),
            location: self.location.clone(),
            age_range: self.age.or(defaults.age_range),
            salary_range: self.salary.or(defaults.salary_range),
            selected_tags: self.tags.clone(),
            status_filter: self.status,
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

impl Cli {
    /// 環境変数の設定にフラグを重ねる。どちらも同じ検証を通る
    fn board_config(&self, mut config: BoardConfig) -> Result<BoardConfig, ConfigError> {
        if let Some(page_size) = self.page_size {
            config = config.with_page_size(page_size)?;
        }
        if let Some(recent_limit) = self.recent_limit {
            config = config.with_recent_limit(recent_limit)?;
        }
        Ok(config)
    }
}

fn load_board(cli: &Cli) -> Result<JobBoard, Box<dyn std::error::Error>> {
    let config = cli.board_config(BoardConfig::from_env()?)?;

    let source: Box<dyn JobSource> = match &cli.jobs {
        Some(path) => Box::new(JsonFileSource::new(Some(path.clone()), None)),
        None => Box::new(FixtureSource),
    };
    Ok(JobBoard::from_source(source.as_ref(), config)?)
}

#[derive(Serialize)]
struct RecommendOutput<'a> {
    profile_completeness: u8,
    #[serde(flatten)]
    buckets: jb_common::recommend::Recommendations<'a>,
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    init_tracing_subscriber(APP_NAME);
    install_tracing_panic_hook(APP_NAME);

    let cli = Cli::parse();
    let mut board = load_board(&cli)?;

    match &cli.command {
        Command::Search(args) => {
            board.set_criteria(args.criteria());
            board.set_page(args.page);
            let page = board.listing();
            info!(
                page = page.page,
                total_items = page.total_items,
                total_pages = page.total_pages,
                "search finished"
            );
            print_json(&page)?;
        }
        Command::Recommend(args) => {
            let profile = match &args.profile {
                Some(path) => JsonFileSource::new(None, Some(path.clone())).load_profile()?,
                None => FixtureSource.load_profile()?,
            };

            for id in &args.toggle_favorite {
                if board.toggle_favorite(id).is_none() {
                    warn!(job_id = %id, "unknown job id; favorite not toggled");
                }
            }

            let output = RecommendOutput {
                profile_completeness: profile_completeness(&profile),
                buckets: board.recommendations(&profile),
            };
            info!(
                recommended = output.buckets.recommended.len(),
                favorites = output.buckets.favorites.len(),
                "recommendations ready"
            );
            print_json(&output)?;
        }
        Command::Stats => print_json(&board.status_counts())?,
    }

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{APP_NAME} failed: {err}");
        std::process::exit(1);
    }
}
