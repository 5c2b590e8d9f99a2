//! pagegen CLI - static HTML page generator.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "pagegen")]
#[command(about = "Static HTML page generator with build report and smoke checks")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to pagegen.toml config file
    #[arg(short, long, default_value = "pagegen.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default pagegen.toml
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        yes: bool,
    },

    /// Render the site page to a file or stdout
    Generate {
        /// File to write (prints to stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Build the page, build report and manifest
    Build {
        /// Output directory (defaults to config or "dist")
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Minify the embedded stylesheet
        #[arg(long)]
        minify: bool,
    },

    /// Run the smoke checks against a fresh build
    Test {
        /// Output directory (defaults to config or "dist")
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries rendered HTML and check progress
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(&cli.config, yes)?;
        }
        Commands::Generate { output } => {
            let file_config = config::load_config(&cli.config)?;
            commands::generate::run(&file_config, output)?;
        }
        Commands::Build { output, minify } => {
            let file_config = config::load_config(&cli.config)?;
            commands::build::run(&file_config, output, minify)?;
        }
        Commands::Test { output } => {
            let file_config = config::load_config(&cli.config)?;
            return commands::test::run(&file_config, output);
        }
    }

    Ok(ExitCode::SUCCESS)
}
