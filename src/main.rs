//! reddix - Entry Point

use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};

/// reddix - terminal feed browser
#[derive(Parser, Debug)]
#[command(name = "reddix")]
#[command(version)]
#[command(about = "Browse, search, and vote on a feed of posts from the terminal")]
pub struct Args {
    /// Path to a JSON posts file (bundled sample feed if not provided)
    pub file: Option<PathBuf>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars
    let config = {
        let config_path = args
            .config
            .clone()
            .unwrap_or_else(reddix::config::default_config_path);
        let config_file = reddix::config::load_config_file(config_path)?;
        let merged = reddix::config::merge_config(config_file);
        reddix::config::apply_env_overrides(merged)
    };

    // Initialize tracing with the configured log file path
    reddix::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let posts = match reddix::data::load_posts(args.file.as_deref()) {
        Ok(posts) => posts,
        Err(err) => {
            warn!(error = %err, "Failed to load posts, starting with an empty feed");
            Vec::new()
        }
    };
    info!(count = posts.len(), "Posts loaded");

    let color = reddix::view::ColorConfig::from_env_and_args(args.no_color);
    reddix::view::run_with_posts(posts, color)?;

    Ok(())
}
