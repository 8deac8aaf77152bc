//! Image modes and their derived sizes.
//!
//! `Mode` is the single source of truth for everything that differs between the physical
//! PROM layout and the emulator layout: sequence and footer sizes, total image size, and
//! the display name used in reports.

use serde::Serialize;

use crate::{FOOTER, SEQUENCE_COPIES, SEQUENCE_LEN, XHOMER_ROM_NAME, interleave};

/// Byte layout of a ROM image.
///
/// Never stored in the image itself; [`crate::detect_mode`] derives it from structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Mode {
    /// One data byte per cell, burned to the K155RE3 PROM
    #[serde(rename = "E85")]
    Plain,
    /// Data byte followed by `0x00`, loaded by the Xhomer emulator
    #[serde(rename = "Xhomer")]
    Interleaved,
}

impl Mode {
    /// Pick the mode from the "file for Xhomer" answer.
    pub const fn from_emulator_flag(emulator: bool) -> Self {
        if emulator {
            Mode::Interleaved
        } else {
            Mode::Plain
        }
    }

    /// Name shown in reports ("E85" or "Xhomer").
    pub const fn name(self) -> &'static str {
        match self {
            Mode::Plain => "E85",
            Mode::Interleaved => "Xhomer",
        }
    }

    /// Bytes written per data byte.
    pub const fn stride(self) -> usize {
        match self {
            Mode::Plain => 1,
            Mode::Interleaved => 2,
        }
    }

    /// Size of one sequence on disk.
    pub const fn sequence_len(self) -> usize {
        SEQUENCE_LEN * self.stride()
    }

    /// Size of the three repeated sequences on disk.
    pub const fn body_len(self) -> usize {
        self.sequence_len() * SEQUENCE_COPIES
    }

    /// Size of the footer on disk.
    pub const fn footer_len(self) -> usize {
        FOOTER.len() * self.stride()
    }

    /// Total image size (32 plain, 64 interleaved).
    pub const fn image_len(self) -> usize {
        self.body_len() + self.footer_len()
    }

    /// Footer as it appears on disk in this mode.
    pub fn footer(self) -> Vec<u8> {
        match self {
            Mode::Plain => FOOTER.to_vec(),
            Mode::Interleaved => interleave(&FOOTER),
        }
    }

    /// Output file name the target expects, if it has a fixed one.
    pub const fn fixed_file_name(self) -> Option<&'static str> {
        match self {
            Mode::Plain => None,
            Mode::Interleaved => Some(XHOMER_ROM_NAME),
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_sizes() {
        assert_eq!(Mode::Plain.sequence_len(), 8);
        assert_eq!(Mode::Plain.image_len(), 32);
        assert_eq!(Mode::Interleaved.sequence_len(), 16);
        assert_eq!(Mode::Interleaved.footer_len(), 16);
        assert_eq!(Mode::Interleaved.image_len(), 64);
    }

    #[test]
    fn test_interleaved_footer() {
        assert_eq!(Mode::Plain.footer(), FOOTER);
        assert_eq!(
            Mode::Interleaved.footer(),
            [
                0x00, 0x00, 0xFF, 0x00, 0x55, 0x00, 0xAA, 0x00, 0xFF, 0x00, 0x00, 0x00, 0xAF,
                0x00, 0x50, 0x00
            ]
        );
    }

    #[test]
    fn test_names_and_file_names() {
        assert_eq!(Mode::Plain.to_string(), "E85");
        assert_eq!(Mode::Interleaved.to_string(), "Xhomer");
        assert_eq!(Mode::Plain.fixed_file_name(), None);
        assert_eq!(Mode::Interleaved.fixed_file_name(), Some("id.rom"));
        assert_eq!(Mode::from_emulator_flag(true), Mode::Interleaved);
        assert_eq!(Mode::from_emulator_flag(false), Mode::Plain);
    }
}
