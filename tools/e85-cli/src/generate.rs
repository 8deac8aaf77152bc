//! Generate an ID ROM file

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use e85_rom::{Mode, Serial, encode};

use crate::prompt::Prompter;

/// Arguments for generating a ROM image
#[derive(Debug, Default, Args)]
pub struct GenerateArgs {
    /// Serial number, 1 to 12 digits (prompted for when omitted)
    #[arg(short, long, value_parser = Serial::parse)]
    pub serial: Option<Serial>,

    /// Write an interleaved image for the Xhomer emulator to ./id.rom
    #[arg(short = 'x', long)]
    pub xhomer: bool,

    /// Output file for the plain (K155RE3) image
    #[arg(short, long, conflicts_with = "xhomer")]
    pub output: Option<PathBuf>,
}

/// Execute the generate command against the console
pub fn execute(args: GenerateArgs) -> Result<()> {
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    run(args, &mut prompter)
}

/// Generate a ROM, asking `prompter` for anything missing from `args`.
///
/// The emulator question is only asked when the serial itself was prompted for, so a
/// fully specified command line never blocks on input.
pub fn run<R: BufRead, W: Write>(args: GenerateArgs, prompter: &mut Prompter<R, W>) -> Result<()> {
    writeln!(prompter.out(), "Elektronika MS0585 and DEC PRO ID Number Generator")?;
    writeln!(prompter.out())?;

    let (serial, emulator) = match args.serial {
        Some(serial) => (serial, args.xhomer),
        None => {
            let serial = prompter.ask_serial()?;
            let emulator =
                args.xhomer || prompter.ask_yes_no("File for Xhomer emulator? (Y/N): ")?;
            (serial, emulator)
        }
    };
    let mode = Mode::from_emulator_flag(emulator);

    let image = encode(&serial, mode);
    tracing::debug!(
        "Encoded serial {} as {} image ({} bytes)",
        serial,
        mode,
        image.bytes.len()
    );

    let out = prompter.out();
    writeln!(out)?;
    writeln!(out, "Resulting HEX dump:")?;
    writeln!(out, "{}", image.hex_dump())?;
    writeln!(out, "Checksum: {} (0x{:04X})", image.checksum, image.checksum)?;
    writeln!(out)?;

    let path = match mode.fixed_file_name() {
        Some(name) => {
            writeln!(
                prompter.out(),
                "Output file name set to '{}' for Xhomer emulator.",
                name
            )?;
            PathBuf::from(name)
        }
        None => match args.output {
            Some(path) => path,
            None => PathBuf::from(prompter.ask_non_empty("Enter output filename: ")?),
        },
    };

    std::fs::write(&path, &image.bytes)
        .with_context(|| format!("Failed to write ROM file: {}", path.display()))?;
    tracing::info!("Wrote {} bytes to {}", image.bytes.len(), path.display());

    let out = prompter.out();
    writeln!(out)?;
    writeln!(out, "File '{}' successfully written.", path.display())?;
    match mode {
        Mode::Interleaved => writeln!(
            out,
            "Place '{}' in your Xhomer emulator directory.",
            path.display()
        )?,
        Mode::Plain => writeln!(
            out,
            "You may now proceed to burn this image to the K155RE3 chip."
        )?,
    }
    out.flush()?;

    Ok(())
}
