//! E85-ROM: ID ROM codec for Elektronika MS0585 and DEC Professional machines
//!
//! The machine reads its serial number from a tiny PROM (K155RE3 on real hardware,
//! `id.rom` for the Xhomer emulator). This crate is a **pure codec**: it turns a decimal
//! serial into the ROM byte layout and back. Prompts, file I/O and reporting live in the
//! `e85-id` CLI.
//!
//! # Image Layout
//!
//! ```text
//! Sequence (8 bytes, written 3 times):
//!   0x00: BCD block (6 bytes, digit pairs in reverse order)
//!   0x06: checksum (u16 LE, rotating XOR over the BCD block)
//!
//! Footer (8 bytes, once):
//!   00 FF 55 AA FF 00 AF 50
//! ```
//!
//! Plain ("E85") images are 32 bytes. Interleaved ("Xhomer") images put a `0x00` after
//! every byte, giving 64 bytes, because the emulator maps the ROM into 16-bit cells and
//! only reads the low byte.
//!
//! # Usage
//!
//! ```
//! use e85_rom::{Mode, Serial, decode, encode};
//!
//! let serial = Serial::parse("123456789012").unwrap();
//! let image = encode(&serial, Mode::Plain);
//! assert_eq!(image.checksum, 0x02E2);
//!
//! let report = decode(&image.bytes).unwrap();
//! assert_eq!(report.serial, "123456789012");
//! assert!(report.is_valid());
//! ```

mod checksum;
mod decode;
mod encode;
mod format;
mod interleave;
mod serial;

pub use checksum::checksum;
pub use decode::{DecodeError, RomReport, Status, decode, detect_mode};
pub use encode::{RomImage, encode, hex_dump};
pub use format::Mode;
pub use interleave::{deinterleave, interleave};
pub use serial::{Serial, SerialError, is_valid_serial};

// =============================================================================
// Constants
// =============================================================================

/// Number of decimal digits in a padded serial
pub const SERIAL_DIGITS: usize = 12;

/// BCD block size (two digits per byte)
pub const BCD_BLOCK_LEN: usize = SERIAL_DIGITS / 2;

/// Stored checksum size (u16 LE)
pub const CHECKSUM_LEN: usize = 2;

/// Plain sequence size (BCD block + checksum)
pub const SEQUENCE_LEN: usize = BCD_BLOCK_LEN + CHECKSUM_LEN;

/// How many times the sequence is repeated in an image
pub const SEQUENCE_COPIES: usize = 3;

/// Trailer marking the end of every image
pub const FOOTER: [u8; 8] = [0x00, 0xFF, 0x55, 0xAA, 0xFF, 0x00, 0xAF, 0x50];

/// File name the Xhomer emulator loads the ID ROM from
pub const XHOMER_ROM_NAME: &str = "id.rom";
