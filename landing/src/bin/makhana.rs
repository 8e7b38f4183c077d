//! # makhana
//!
//! Renders the MakhanaCo hero to static HTML and inspects kernel layouts.
//!
//! ```bash
//! # Full page with a pinned layout
//! makhana render --seed 42 --out public/index.html
//!
//! # Just the <section>, for embedding
//! makhana render --fragment
//!
//! # Kernel placements as JSON, or a summary
//! makhana scatter --seed 42
//! makhana scatter --stats
//! ```
//!
//! Developed with 🌿 by The MakhanaCo Team (c)2025

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use kernel_scatter::{Scatter, seeded_or_entropy};
use makhana_landing::{LandingConfig, render_hero, render_page};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "makhana")]
#[command(about = "Render the MakhanaCo hero section and inspect its kernel layout")]
#[command(version)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the hero as HTML
    Render {
        #[command(flatten)]
        source: LayoutSource,
        /// Write to this file instead of stdout
        #[arg(long, short)]
        out: Option<PathBuf>,
        /// Emit only the hero <section>, without the surrounding document
        #[arg(long)]
        fragment: bool,
    },
    /// Print generated kernels as JSON
    Scatter {
        #[command(flatten)]
        source: LayoutSource,
        /// Print a summary instead of every kernel
        #[arg(long)]
        stats: bool,
    },
}

#[derive(Args, Debug)]
struct LayoutSource {
    /// Seed for a reproducible layout (random when omitted)
    #[arg(long)]
    seed: Option<u64>,
    /// Config file (default: .makhana/hero.toml in the current directory)
    #[arg(long)]
    config: Option<PathBuf>,
}

impl LayoutSource {
    fn load(&self) -> LandingConfig {
        match &self.config {
            Some(path) => LandingConfig::load_from_path(path),
            None => LandingConfig::load(&PathBuf::from(".")),
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.parse().unwrap_or_default()),
        )
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Render {
            source,
            out,
            fragment,
        } => {
            let config = source.load();
            let html = if fragment {
                render_hero(&config, source.seed)
            } else {
                render_page(&config, source.seed)
            }
            .context("invalid hero configuration")?;

            match out {
                Some(path) => {
                    std::fs::write(&path, html)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    info!("Hero written to {}", path.display());
                }
                None => println!("{html}"),
            }
        }
        Command::Scatter { source, stats } => {
            let config = source.load();
            let scatter =
                Scatter::new(config.scatter).context("invalid scatter configuration")?;
            let (kernels, layout_stats) =
                scatter.generate_with_stats(&mut seeded_or_entropy(source.seed));

            let json = if stats {
                serde_json::to_string_pretty(&layout_stats)?
            } else {
                serde_json::to_string_pretty(&kernels)?
            };
            println!("{json}");
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("makhana: {e:#}");
            ExitCode::FAILURE
        }
    }
}
