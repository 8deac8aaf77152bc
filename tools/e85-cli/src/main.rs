//! E85 ID - ID ROM tool for Elektronika MS0585 and DEC Professional machines
//!
//! # Commands
//!
//! - `e85-id` - Interactive mode (choose generate, check or help)
//! - `e85-id generate` / `e85-id -g` - Generate a ROM image
//! - `e85-id check FILE` / `e85-id -c FILE` - Check and decode a ROM image
//!
//! # Usage
//!
//! ```bash
//! # Image for burning to a K155RE3 PROM
//! e85-id generate --serial 123456789012 -o e85.rom
//!
//! # Image for the Xhomer emulator (always written to id.rom)
//! e85-id generate --serial 123456789012 --xhomer
//!
//! # Verify an existing image
//! e85-id check id.rom
//! ```
//!
//! Anything not given on the command line is asked for interactively.

mod check;
mod generate;
mod interactive;
mod prompt;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// E85 ID - ID ROM generator and checker
#[derive(Parser)]
#[command(name = "e85-id")]
#[command(about = "Generate and check ID ROM files for Elektronika MS0585 and DEC PRO")]
#[command(
    long_about = "Generate and check ID ROM files for Elektronika MS0585 and DEC PRO.\n\n\
                  Run without arguments for interactive mode, which lets you generate or \
                  check ROM files."
)]
#[command(version)]
struct Cli {
    /// Log debug output to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a ROM file (prompts for missing values)
    #[command(short_flag = 'g')]
    Generate(generate::GenerateArgs),

    /// Check and decode a ROM file
    #[command(short_flag = 'c')]
    Check(check::CheckArgs),
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli.command) {
        tracing::debug!("command failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(command: Option<Commands>) -> Result<()> {
    match command {
        Some(Commands::Generate(args)) => generate::execute(args),
        Some(Commands::Check(args)) => check::execute(args),
        None => interactive::execute(),
    }
}
