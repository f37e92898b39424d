use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use brandmatch::catalog::{self, CatalogFilter};
use brandmatch::config::AppConfig;
use brandmatch::engine::{AlwaysMatch, MatchPolicy, NeverMatch, RandomWithRate, SwipeSession};
use brandmatch::matches::{mock::demo_matches, MatchList};
use brandmatch::ui::app::App;
use brandmatch::ui::runtime;

/// Swipe through franchise brands and collect matches, in the terminal.
#[derive(Parser, Debug)]
#[command(name = "brandmatch", version, about)]
struct Cli {
    /// Path to a TOML config file (default: the platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Path to a JSON brand catalog (default: the built-in demo brands).
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Brand id to swipe as; never shown in the deck.
    #[arg(long)]
    owner: Option<String>,

    /// Probability in [0, 1] that a positive swipe declares a match.
    #[arg(long)]
    match_rate: Option<f64>,

    /// Seed the match policy RNG for a reproducible session.
    #[arg(long)]
    seed: Option<u64>,

    /// Declare a match on every positive swipe (demo).
    #[arg(long, conflicts_with_all = ["never_match", "match_rate"])]
    always_match: bool,

    /// Never declare a match (demo).
    #[arg(long)]
    never_match: bool,

    /// Only include brands from these industries (repeatable).
    #[arg(long = "industry")]
    industries: Vec<String>,

    /// Only include brands from these locations (repeatable).
    #[arg(long = "location")]
    locations: Vec<String>,

    /// Append logs to this file (the TUI owns the terminal).
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path)
            .with_context(|| format!("failed to load config from '{}'", path.display()))?,
        None => AppConfig::load().context("failed to load config")?,
    };
    if let Some(owner) = cli.owner {
        config.owner_brand_id = owner;
    }
    if let Some(rate) = cli.match_rate {
        config.match_rate = rate;
    }
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(catalog_path) = cli.catalog {
        config.catalog_path = Some(catalog_path);
    }
    config.validate().context("invalid configuration")?;

    let brands =
        catalog::load_catalog(config.catalog_path.as_deref()).context("failed to load catalog")?;
    let filter = CatalogFilter {
        industries: cli.industries,
        locations: cli.locations,
        ..Default::default()
    };
    let brands = if filter.is_empty() {
        brands
    } else {
        filter.apply(&brands)
    };

    let policy: Box<dyn MatchPolicy> = if cli.always_match {
        Box::new(AlwaysMatch)
    } else if cli.never_match {
        Box::new(NeverMatch)
    } else {
        match config.seed {
            Some(seed) => Box::new(RandomWithRate::seeded(config.match_rate, seed)),
            None => Box::new(RandomWithRate::new(config.match_rate)),
        }
    };

    let session = SwipeSession::with_policy(brands, config.owner_brand_id.clone(), policy);
    let matches = MatchList::seeded(demo_matches());
    let banner_ticks = (config.banner_seconds * 1000 / runtime::TICK_MS).max(1) as u32;
    let mut app = App::new(session, matches, banner_ticks);

    runtime::run(&mut app)
}

fn init_logging(path: Option<&Path>) -> anyhow::Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file '{}'", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
