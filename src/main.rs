//! folio - Entry Point

use clap::Parser;
use folio::model::{PortfolioContent, SectionId};
use folio::state::AppState;
use folio::view::LaunchOptions;
use std::path::PathBuf;
use tracing::info;

/// folio - an animated portfolio page in the terminal
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Animated single-page portfolio rendered in the terminal")]
pub struct Args {
    /// Path to a JSON content file (built-in content if not provided)
    #[arg(long)]
    pub content: Option<PathBuf>,

    /// Open at a section anchor (home, skills, experience, education,
    /// achievements, projects, contact)
    #[arg(short, long)]
    pub section: Option<SectionId>,

    /// Show everything immediately without entrance animations
    #[arg(long)]
    pub reduced_motion: bool,

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
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = folio::config::load_config_with_precedence(args.config.clone())?;
        let merged = folio::config::merge_config(config_file);
        let with_env = folio::config::apply_env_overrides(merged);

        // Flags only override when explicitly set
        let reduced_motion_override = if args.reduced_motion { Some(true) } else { None };
        folio::config::apply_cli_overrides(with_env, args.content.clone(), reduced_motion_override)
    };

    folio::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let content = PortfolioContent::load_or_builtin(config.content_path.as_deref())?;
    let (columns, rows) = crossterm::terminal::size().unwrap_or((80, 24));
    let state = AppState::new(content, &config, columns, rows);

    folio::view::run_with_state(
        state,
        LaunchOptions {
            no_color: args.no_color,
            start_section: args.section,
        },
    )?;

    Ok(())
}
