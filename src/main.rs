mod commands;
mod render;
mod session;
mod utils;

use std::env;
use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::{Context, Result};
use calgrid_core::{CalendarStore, CalgridConfig, YearMonth};
use clap::Parser;
use session::Session;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use utils::tui::{Lines, Prompt};

#[derive(Parser)]
#[command(name = "calgrid")]
#[command(about = "Month calendar in the terminal: pick a day, add and edit its events")]
struct Cli {
    /// Month to show first (YYYY-MM), instead of the current month
    #[arg(short, long)]
    month: Option<String>,

    /// Read configuration from this file instead of ~/.config/calgrid/config.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write a commented default config file and exit
    #[arg(long)]
    init_config: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_path = match cli.config {
        Some(path) => path,
        None => CalgridConfig::config_path()?,
    };

    if cli.init_config {
        CalgridConfig::create_default_config(&config_path)?;
        println!("Wrote {}", config_path.display());
        return Ok(());
    }

    let config = CalgridConfig::load_from(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    let today = chrono::Local::now().date_naive();
    let mut store = CalendarStore::new(today).with_regrouping(config.regrouping);
    store.activate(today);

    if let Some(month) = cli.month {
        let month: YearMonth = month.parse()?;
        store.show_month(month);
    }

    info!(month = %store.displayed_month(), regrouping = ?config.regrouping, "starting session");

    let mut session = Session::new(store, config);
    let mut out = std::io::stdout().lock();

    if std::io::stdin().is_terminal() {
        session.run(&mut Prompt, &mut out)
    } else {
        session.run(&mut Lines::new(std::io::stdin().lock()), &mut out)
    }
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("CALGRID_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "calgrid=debug,calgrid_core=debug,warn"
        } else {
            "calgrid=warn,calgrid_core=warn"
        })
    });

    let format = env::var("CALGRID_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}
