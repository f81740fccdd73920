//! Weather Telemetry Node daemon.
//!
//! Accepts sensor pushes on `/update`, serves the report on `/`, and
//! drives the display and LED indicator from the latest snapshot.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use weatherd::clock::SystemClock;
use weatherd::config::Config;
use weatherd::render::Renderer;
use weatherd::server::{self, AppState};
use weatherd::sinks::console::{ConsoleDisplay, ConsoleIndicator};
use weatherd::store::TelemetryStore;

#[derive(Debug, Parser)]
#[command(name = "weatherd", about = "Weather telemetry node daemon", version)]
struct Args {
    /// Config file path.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the configured listen address.
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let config = Config::load(args.config.as_deref())?;
    let bind = args.bind.unwrap_or_else(|| config.server.bind.clone());

    info!("weatherd v{} starting", env!("CARGO_PKG_VERSION"));

    // Sink construction failure is fatal at startup.
    let display = ConsoleDisplay::new()?;
    let indicator = ConsoleIndicator::new()?;

    let renderer = Renderer::new(
        Box::new(display),
        Box::new(indicator),
        Box::new(SystemClock),
        config.display.unit,
        config.indicator.led_count,
    );

    let state = AppState::new(TelemetryStore::new(), renderer, config);
    server::run(state, &bind).await
}
