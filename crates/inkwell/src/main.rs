//! Inkwell CLI - turn Markdown posts into importable data modules.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "inkwell")]
#[command(about = "Turn Markdown posts into importable data modules")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to inkwell.toml config file
    #[arg(short, long, default_value = "inkwell.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default inkwell.toml
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        yes: bool,
    },

    /// Transform Markdown files into JavaScript modules
    Transform {
        /// Markdown files to transform
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output directory (defaults to config or "dist")
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print modules to stdout instead of writing files
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
    },

    /// Print the document record of a Markdown file as JSON
    Inspect {
        /// Markdown file to inspect
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
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

    // Execute command
    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(&cli.config, yes)?;
        }
        Commands::Transform {
            files,
            output,
            stdout,
        } => {
            let target = if stdout {
                commands::transform::Target::Stdout
            } else {
                commands::transform::Target::Dir(output)
            };
            commands::transform::run(&cli.config, &files, target)?;
        }
        Commands::Inspect { file } => {
            commands::inspect::run(&cli.config, &file)?;
        }
    }

    Ok(())
}
