use std::{fs::OpenOptions, path::PathBuf, sync::Mutex};

use anyhow::{Context, Result};
use clap::Parser;
use tcalc_engine::{NavigatorConfig, SearchBound, WrapMode};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Keyboard-driven terminal calculator.
#[derive(Parser, Debug)]
#[command(name = "tcalc", version, about)]
struct Args {
    /// Edge wrapping: none, row, column or both
    #[arg(long, env = "TCALC_WRAP", default_value_t = WrapMode::Row)]
    wrap: WrapMode,

    /// Turn edge wrapping off regardless of --wrap
    #[arg(long, env = "TCALC_NO_WRAP")]
    no_wrap: bool,

    /// How far to look for a key past an empty cell: a number of cells, or `grid`
    #[arg(long, env = "TCALC_SEARCH_RADIUS", default_value_t = SearchBound::default())]
    search_radius: SearchBound,

    /// Write logs to this file; logs are discarded otherwise
    #[arg(long, env = "TCALC_LOG_PATH")]
    log_file: Option<PathBuf>,
}

impl Args {
    fn navigator_config(&self) -> NavigatorConfig {
        NavigatorConfig::default()
            .with_wrap_mode(self.wrap)
            .with_wrap_enabled(!self.no_wrap)
            .with_search_bound(self.search_radius)
    }
}

/// CLI entry point
#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.log_file.as_ref())?;
    info!(?args, "parsed arguments");
    tcalc_tui::run(args.navigator_config()).await
}

/// The terminal belongs to the UI, so logs only go to a file.
fn init_tracing(log_file: Option<&PathBuf>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
    Ok(())
}
