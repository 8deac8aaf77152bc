//! Check and decode an ID ROM file

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use e85_rom::{RomReport, decode};

/// Arguments for checking a ROM image
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// ROM file to check
    pub file: PathBuf,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute the check command
///
/// Checksum and footer mismatches are part of the report, not errors. Only unreadable or
/// structurally short files fail.
pub fn execute(args: CheckArgs) -> Result<()> {
    let data = std::fs::read(&args.file)
        .with_context(|| format!("Failed to open file: {}", args.file.display()))?;
    tracing::debug!("Read {} bytes from {}", data.len(), args.file.display());

    let report = decode(&data)
        .with_context(|| format!("Malformed ROM file: {}", args.file.display()))?;

    if !report.is_valid() {
        tracing::warn!(
            "Integrity check failed for {} (checksum {}, footer {})",
            args.file.display(),
            report.checksum_status,
            report.footer_status
        );
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        write_report(&report, &mut io::stdout().lock())?;
    }

    Ok(())
}

/// Write the human-readable report
fn write_report(report: &RomReport, out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "ROM file analysis:")?;
    writeln!(out, "  Mode: {}", report.mode)?;
    writeln!(out, "  ID: {}", report.serial)?;
    writeln!(
        out,
        "  Checksum in ROM: {} (0x{:04X})",
        report.stored_checksum, report.stored_checksum
    )?;
    writeln!(
        out,
        "  Calculated CRC:  {} (0x{:04X})  [{}]",
        report.computed_checksum, report.computed_checksum, report.checksum_status
    )?;
    writeln!(
        out,
        "  Footer: {} [{}]",
        hex::encode_upper(&report.footer),
        report.footer_status
    )?;
    writeln!(out)?;

    if report.is_valid() {
        writeln!(out, "File is valid.")
    } else {
        writeln!(out, "File integrity or format may be broken!")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use e85_rom::{Mode, Serial, encode};

    fn render(report: &RomReport) -> String {
        let mut out = Vec::new();
        write_report(report, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn report_for(serial: &str, mode: Mode) -> RomReport {
        decode(&encode(&Serial::parse(serial).unwrap(), mode).bytes).unwrap()
    }

    #[test]
    fn test_render_valid_report() {
        let text = render(&report_for("123456789012", Mode::Plain));

        assert!(text.contains("  Mode: E85\n"));
        assert!(text.contains("  ID: 123456789012\n"));
        assert!(text.contains("  Checksum in ROM: 738 (0x02E2)\n"));
        assert!(text.contains("  Calculated CRC:  738 (0x02E2)  [OK]\n"));
        assert!(text.contains("  Footer: 00FF55AAFF00AF50 [OK]\n"));
        assert!(text.ends_with("File is valid.\n"));
    }

    #[test]
    fn test_render_broken_report() {
        let mut report = report_for("5", Mode::Interleaved);
        report.stored_checksum ^= 1;
        report.checksum_status = e85_rom::Status::Invalid;

        let text = render(&report);
        assert!(text.contains("  Mode: Xhomer\n"));
        assert!(text.contains("  ID: 000000000005\n"));
        assert!(text.contains("[INVALID]"));
        assert!(text.ends_with("File integrity or format may be broken!\n"));
    }

    #[test]
    fn test_missing_file_is_error() {
        let err = execute(CheckArgs {
            file: PathBuf::from("definitely/not/here.rom"),
            json: false,
        })
        .unwrap_err();
        assert!(err.to_string().starts_with("Failed to open file"));
    }
}
