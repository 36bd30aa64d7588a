//! CLI entry point.
//!
//! # Responsibility
//! - Bootstrap brands and print their rendered pages.
//! - Keep output deterministic so pages can be diffed.

use clap::{Parser, Subcommand};
use log::debug;
use std::path::PathBuf;
use whitelabel_cli::{list_points, load_brands};
use whitelabel_core::{core_version, default_log_level, init_logging, LoggingConfig};

#[derive(Parser)]
#[command(
    name = "whitelabel",
    version,
    about = "Render branded experiences of the white-label shell"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true, env = "WHITELABEL_LOG_LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for rolling log files; logs go to stderr otherwise.
    #[arg(long, global = true, env = "WHITELABEL_LOG_DIR")]
    log_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render built-in brands, or one brand from a JSON manifest.
    Render {
        /// Built-in brand names; defaults to all of them.
        brands: Vec<String>,
        #[arg(long, conflicts_with = "brands")]
        manifest: Option<PathBuf>,
    },
    /// List declared extension points.
    Points {
        /// Only describe this point, e.g. `MainViewContent`.
        #[arg(long)]
        point: Option<String>,
        /// Print JSON instead of tab-separated lines.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&LoggingConfig {
        level: cli
            .log_level
            .unwrap_or_else(|| default_log_level().to_string()),
        log_dir: cli.log_dir,
    })?;
    debug!(
        "event=cli_start module=cli status=ok version={}",
        core_version()
    );

    match cli.command {
        Commands::Render { brands, manifest } => {
            for brand in load_brands(brands, manifest)? {
                println!("{}", brand.render_html()?);
            }
        }
        Commands::Points { point, json } => {
            let points = list_points(point.as_deref())?;
            if json {
                println!("{}", serde_json::to_string_pretty(&points)?);
            } else {
                for info in points {
                    println!("{}\t{:?}", info.name, info.cardinality);
                }
            }
        }
    }
    Ok(())
}
