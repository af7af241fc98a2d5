use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use roster::core::config::{self, CliOverrides};
use roster::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

#[derive(Parser)]
#[command(name = "roster", about = "Terminal customer manager for a REST resource")]
struct Args {
    /// Base URL of the REST server (overrides ROSTER_BASE_URL and the config file)
    #[arg(long)]
    base_url: Option<String>,

    /// Collection path under the base URL, e.g. "customers"
    #[arg(long)]
    path: Option<String>,

    /// Config file to use instead of ~/.roster/config.toml
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to roster.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("roster.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config(args.config.as_deref()).map_err(|e| {
        log::error!("Failed to load config: {}", e);
        std::io::Error::other(e.to_string())
    })?;
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            base_url: args.base_url.as_deref(),
            path: args.path.as_deref(),
        },
    );

    log::info!(
        "Roster starting up against {}/{}",
        resolved.base_url,
        resolved.path
    );

    tui::run(resolved)
}
