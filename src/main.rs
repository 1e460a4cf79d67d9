//! Indexer browser - Entry Point

use clap::Parser;
use idxview::api::HttpIndexerApi;
use idxview::config::ResolvedConfig;
use idxview::fetch::FetchWorker;
use idxview::model::AppError;
use idxview::state::AppState;
use idxview::view::{ColorConfig, Palette, ViewConfig};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Terminal browser for indexer categories and resources
#[derive(Parser, Debug)]
#[command(name = "idxview")]
#[command(version)]
#[command(about = "TUI for browsing indexer category trees and resource listings")]
pub struct Args {
    /// Initial location, e.g. "indexer=nyaa&category=1_2&page=3"
    pub location: Option<String>,

    /// Indexer server base URL
    #[arg(long)]
    pub server: Option<String>,

    /// Resources requested per page
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub page_size: Option<u32>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let (config, api) = start_up(&args)?;

    let worker = FetchWorker::new(Arc::new(api), config.page_size);
    let app_state = AppState::new(args.location.as_deref().unwrap_or_default())
        .with_max_visible_pages(config.max_visible_pages);
    let view_config = ViewConfig {
        card_width: config.card_width,
        palette: Palette::new(ColorConfig::from_env_and_args(args.no_color)),
    };

    let location = idxview::view::run(app_state, worker, view_config)?;
    info!(location = %location, "exiting");
    println!("{location}");

    Ok(())
}

/// Resolve configuration, install logging and build the HTTP client.
fn start_up(args: &Args) -> Result<(ResolvedConfig, HttpIndexerApi), AppError> {
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = idxview::config::load_config_with_precedence(args.config.clone())?;
        let merged = idxview::config::merge_config(config_file);
        let with_env = idxview::config::apply_env_overrides(merged);
        idxview::config::apply_cli_overrides(with_env, args.server.clone(), args.page_size)
    };

    idxview::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let api = HttpIndexerApi::new(&config.server_url, config.request_timeout())?;
    Ok((config, api))
}
