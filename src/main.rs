//! Postwall - Entry Point

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use postwall::layout::ColumnLayoutEngine;
use postwall::model::{FeedRevision, ViewportWidth};
use postwall::view;

/// Postwall - masonry column layout for post feeds
#[derive(Parser, Debug)]
#[command(name = "postwall")]
#[command(version)]
#[command(about = "Arrange a JSON posts payload into balanced columns")]
pub struct Args {
    /// Path to posts JSON file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Viewport width in pixels (overrides config and POSTWALL_WIDTH)
    #[arg(short, long)]
    pub width: Option<u16>,

    /// Emit the layout as JSON instead of text lanes
    #[arg(long)]
    pub json: bool,

    /// Mark the current user as authenticated
    #[arg(long)]
    pub authenticated: bool,

    /// Lane width in terminal cells for text output
    #[arg(long, default_value_t = view::DEFAULT_LANE_WIDTH, value_parser = clap::value_parser!(usize))]
    pub lane_width: usize,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Resolve configuration with the full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = postwall::config::load_config_with_precedence(args.config.clone())?;
        let merged = postwall::config::merge_config(config_file);
        let with_env = postwall::config::apply_env_overrides(merged);

        let authenticated_override = if args.authenticated { Some(true) } else { None };
        postwall::config::apply_cli_overrides(with_env, args.width, authenticated_override)
    };

    postwall::logging::init(&config.log_file_path)?;
    info!(config = ?config, "Configuration loaded and resolved");

    let mut posts = postwall::source::load_posts(args.file.clone())?;

    let width = ViewportWidth::new(config.default_width);
    let mut engine = ColumnLayoutEngine::new(width, config.authenticated);
    engine.recompute(&mut posts, FeedRevision::default().next());

    let output = if args.json {
        view::layout_to_json(engine.columns(), &posts)?
    } else {
        view::render_columns(engine.columns(), &posts, args.lane_width)
    };
    print!("{output}");

    Ok(())
}
