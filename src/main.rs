//! Interactive regex tester - Entry Point

use clap::Parser;
use rgx::model::AppError;
use rgx::view::{ColorConfig, StyleConfig};
use std::path::PathBuf;
use tracing::{info, warn};

/// Interactive regex tester - highlight matches live, print the pattern on exit
#[derive(Parser, Debug)]
#[command(name = "rgx")]
#[command(version)]
#[command(about = "Try a regular expression against text piped on stdin")]
pub struct Args {
    /// Initial pattern (overrides config and RGX_PATTERN)
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let pattern = run(args)?;
    println!("{pattern}");
    Ok(())
}

fn run(args: Args) -> Result<String, AppError> {
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = rgx::config::load_config_with_precedence(args.config.clone())?;
        let merged = rgx::config::merge_config(config_file);
        let with_env = rgx::config::apply_env_overrides(merged);
        rgx::config::apply_cli_overrides(with_env, args.pattern.clone())
    };

    rgx::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let document = rgx::source::initial_document()
        .map_err(AppError::from)
        .unwrap_or_else(|e| {
            report_nonfatal(&e);
            None
        })
        .unwrap_or_default();

    let styles = StyleConfig::new(
        &config.palette,
        ColorConfig::from_env_and_args(args.no_color),
    );

    Ok(rgx::view::run_with(&config, &document, styles)?)
}

/// Stdin failures are reported, then the session starts empty.
fn report_nonfatal(error: &AppError) {
    warn!(error = %error, "Starting with an empty document");
    eprintln!("rgx: {error}");
}
