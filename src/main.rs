//! tabflow - Entry Point

use clap::Parser;
use std::path::PathBuf;
use tabflow::model::RouteId;
use tracing::info;

/// TUI wallet shell with animated tab-content transitions
#[derive(Parser, Debug)]
#[command(name = "tabflow")]
#[command(version)]
#[command(about = "TUI wallet shell with animated tab-content transitions")]
pub struct Args {
    /// Tab to show on startup
    #[arg(short, long)]
    pub route: Option<RouteId>,

    /// Event-loop tick interval in milliseconds
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub tick_rate: Option<u64>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = tabflow::config::load_config_with_precedence(args.config.clone())?;
        let merged = tabflow::config::merge_config(config_file);
        let with_env = tabflow::config::apply_env_overrides(merged);
        tabflow::config::apply_cli_overrides(with_env, args.route, args.tick_rate)
    };

    tabflow::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let route_table = tabflow::view::default_route_table();
    tabflow::view::run_with_config(&config, route_table)?;

    Ok(())
}
