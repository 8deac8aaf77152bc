//! Interactive mode: pick an operation from a menu

use std::io::{self, Write};

use anyhow::Result;
use clap::CommandFactory;

use crate::check::{self, CheckArgs};
use crate::generate::{self, GenerateArgs};
use crate::prompt::Prompter;

/// Run the menu, the chosen operation, then wait for Enter.
///
/// Failures of the chosen operation are printed rather than returned so the window of a
/// double-clicked executable stays open long enough to read them.
pub fn execute() -> Result<()> {
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    println!("e85-id - interactive mode");
    println!();
    println!("Choose operation:");
    println!("  [G] Generate new ROM file");
    println!("  [C] Check and decode existing ROM file");
    println!("  [H] Help");
    println!();

    let choice = prompter.ask_choice(
        "Enter mode (G/C/H): ",
        &['g', 'c', 'h'],
        "Invalid choice. Please type G, C or H.",
    )?;

    let result = match choice {
        'g' => generate::run(GenerateArgs::default(), &mut prompter),
        'c' => prompter
            .ask_non_empty("Enter ROM filename to check: ")
            .and_then(|file| {
                check::execute(CheckArgs {
                    file: file.into(),
                    json: false,
                })
            }),
        _ => print_help(),
    };

    if let Err(e) = result {
        tracing::debug!("interactive operation failed: {:?}", e);
        println!("Error: {:#}", e);
        println!();
    }

    prompter.pause()
}

fn print_help() -> Result<()> {
    crate::Cli::command().print_long_help()?;
    println!();
    io::stdout().flush()?;
    Ok(())
}
