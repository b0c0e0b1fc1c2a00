use analytics::AnalyticsEngine;
use analyzer::{Analyzer, TopN};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use configuration::{Config, FilterSettings, OutputFormat};
use core_types::{Campaign, Platform, Product};
use dataset::Snapshot;
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod render;

/// The main entry point for the kpiboard application.
fn main() -> Result<()> {
    // A missing .env file is normal; only its values matter when present.
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    let config = configuration::load_config(cli.config.as_deref())
        .context("Failed to load configuration")?;
    init_logging(&config)?;

    // Execute the appropriate command
    match cli.command {
        Commands::Report(args) => handle_report(args, &config),
        Commands::Raw(args) => handle_raw(args, &config),
        Commands::Generate(args) => handle_generate(args, &config),
    }
}

/// Installs the stderr subscriber. `RUST_LOG` wins over the configured level.
fn init_logging(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .context("Invalid logging level")?;

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Influencer campaign performance: revenue, spend, ROI and ROAS from four CSV tables.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a TOML configuration file (defaults to ./config.toml when present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Join, score, filter and aggregate the dataset into the dashboard report.
    Report(ReportArgs),
    /// Show one of the input tables as loaded.
    Raw(RawArgs),
    /// Write a synthetic dataset.
    Generate(GenerateArgs),
}

#[derive(Parser)]
struct ReportArgs {
    /// Directory containing the four CSV tables.
    #[arg(long)]
    data: Option<PathBuf>,

    /// Allowed influencer platforms (repeatable). Defaults to every platform present.
    #[arg(long = "platform")]
    platforms: Vec<Platform>,

    /// Allowed campaigns (repeatable). Defaults to every campaign present.
    #[arg(long = "campaign")]
    campaigns: Vec<Campaign>,

    /// Allowed products (repeatable). Defaults to every product present.
    #[arg(long = "product")]
    products: Vec<Product>,

    /// Number of influencers in the top-N view (5-20).
    #[arg(long)]
    top_n: Option<usize>,

    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Also print the filtered records and the follower/revenue points.
    #[arg(long)]
    records: bool,
}

#[derive(Parser)]
struct RawArgs {
    #[arg(value_enum)]
    table: RawTable,

    /// Directory containing the four CSV tables.
    #[arg(long)]
    data: Option<PathBuf>,

    /// Maximum number of rows to print.
    #[arg(long, default_value_t = 20)]
    limit: usize,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum RawTable {
    Influencers,
    Posts,
    Tracking,
    Payouts,
}

#[derive(Parser)]
struct GenerateArgs {
    /// Output directory (defaults to the configured data directory).
    #[arg(long)]
    out: Option<PathBuf>,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    influencers: Option<usize>,

    #[arg(long)]
    posts: Option<usize>,

    #[arg(long)]
    events: Option<usize>,
}

// ==============================================================================
// Command Logic
// ==============================================================================

fn load(dir: &Path) -> Result<Snapshot> {
    dataset::load_snapshot(dir)
        .with_context(|| format!("Failed to load dataset from {}", dir.display()))
}

/// CLI values replace the configured set of a dimension; otherwise the configured one applies.
fn merge_selection(configured: &FilterSettings, args: &ReportArgs) -> FilterSettings {
    fn choose<T: Clone>(cli: &[T], configured: &Option<Vec<T>>) -> Option<Vec<T>> {
        if cli.is_empty() {
            configured.clone()
        } else {
            Some(cli.to_vec())
        }
    }

    FilterSettings {
        platforms: choose(&args.platforms, &configured.platforms),
        campaigns: choose(&args.campaigns, &configured.campaigns),
        products: choose(&args.products, &configured.products),
    }
}

fn handle_report(args: ReportArgs, config: &Config) -> Result<()> {
    let dir = args.data.clone().unwrap_or_else(|| config.data.directory.clone());
    let snapshot = load(&dir)?;

    let records = AnalyticsEngine::new()
        .analyse(snapshot.events(), snapshot.payouts(), snapshot.influencers())
        .context("Failed to join the dataset")?;

    let top_n = TopN::new(args.top_n.unwrap_or(config.dashboard.top_n))?;
    let selection = merge_selection(&config.filters, &args);
    let report = Analyzer::new(top_n).run_with_selection(&records, &selection)?;

    match args.format.unwrap_or(config.dashboard.format) {
        OutputFormat::Table => render::print_report(&report, args.records),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}

fn handle_raw(args: RawArgs, config: &Config) -> Result<()> {
    let dir = args.data.unwrap_or_else(|| config.data.directory.clone());
    let snapshot = load(&dir)?;
    render::print_raw(&snapshot, args.table, args.limit);
    Ok(())
}

fn handle_generate(args: GenerateArgs, config: &Config) -> Result<()> {
    let mut config = config.clone();
    let generator = &mut config.generator;
    generator.seed = args.seed.or(generator.seed);
    generator.influencers = args.influencers.unwrap_or(generator.influencers);
    generator.posts = args.posts.unwrap_or(generator.posts);
    generator.events = args.events.unwrap_or(generator.events);
    configuration::validate(&config)?;

    let dir = args.out.unwrap_or_else(|| config.data.directory.clone());
    let anchor = chrono::Utc::now().naive_utc();
    let snapshot = dataset::generate(&config.generator, anchor)?;
    dataset::write_snapshot(&dir, &snapshot)
        .with_context(|| format!("Failed to write dataset to {}", dir.display()))?;

    let summary = snapshot.summary();
    println!(
        "Generated {} influencers, {} posts, {} tracking events and {} payouts in {}",
        summary.influencers,
        summary.posts,
        summary.events,
        summary.payouts,
        dir.display()
    );
    Ok(())
}
