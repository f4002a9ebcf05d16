//! Canopy CLI - Command-line interface for Canopy
//!
//! This is the main entry point for users interacting with Canopy.
//! It materializes source files into syntax graphs and exports or
//! summarizes them.

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "canopy")]
#[command(author = "Canopy Contributors")]
#[command(version)]
#[command(about = "Materialize concrete syntax trees into graphs", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Materialize a source file and export its syntax graph
    Graph {
        /// Source file to materialize
        file: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Export format
        #[arg(long, value_enum, default_value = "dot")]
        format: commands::Format,
    },

    /// Show statistics for a source file's syntax graph
    Stats {
        /// Source file to materialize
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();

    let result = match cli.command {
        Commands::Graph {
            file,
            output,
            format,
        } => commands::graph(&file, output.as_deref(), format),
        Commands::Stats { file } => commands::stats(&file),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}
