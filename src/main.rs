//! threadfold - Entry Point

use clap::Parser;
use std::path::PathBuf;
use threadfold::presenter::ListPresenter;
use threadfold::view::{ColorConfig, ScreenOptions};
use tracing::info;

/// threadfold - browse a comment list with collapsible reply threads
#[derive(Parser, Debug)]
#[command(name = "threadfold")]
#[command(version)]
#[command(about = "Browse a flat comment list with expandable reply threads")]
pub struct Args {
    /// Seed file describing the initial comments and replies
    #[arg(long)]
    pub seed: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Replies materialized for seed comments that don't declare a count
    #[arg(long)]
    pub reply_count: Option<usize>,

    /// Lines assumed for rows that were never measured (must be positive)
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    pub estimated_row_height: Option<u16>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = threadfold::config::load_config_with_precedence(args.config.clone())?;
        let merged = threadfold::config::merge_config(config_file);
        let with_env = threadfold::config::apply_env_overrides(merged);
        threadfold::config::apply_cli_overrides(
            with_env,
            args.seed.clone(),
            args.reply_count,
            args.estimated_row_height,
        )
    };

    threadfold::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let presenter = ListPresenter::from_config(&config)?;

    let options = ScreenOptions {
        estimated_row_height: config.estimated_row_height,
        colors: ColorConfig::from_env_and_args(args.no_color),
    };
    threadfold::view::run(presenter, options)?;

    Ok(())
}
