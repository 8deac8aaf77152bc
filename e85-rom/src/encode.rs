//! ROM image encoder

use crate::{Mode, SEQUENCE_COPIES, Serial, checksum, interleave};

/// An encoded ROM image ready to be written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RomImage {
    /// Layout the image was encoded for
    pub mode: Mode,
    /// Checksum stored in every sequence
    pub checksum: u16,
    /// Raw file contents
    pub bytes: Vec<u8>,
}

impl RomImage {
    /// Space-separated uppercase hex of the whole image.
    pub fn hex_dump(&self) -> String {
        hex_dump(&self.bytes)
    }
}

/// Encode a serial into a ROM image.
///
/// The checksum is always taken over the plain BCD block; interleaving is applied to the
/// block, the checksum bytes and the footer separately afterwards.
pub fn encode(serial: &Serial, mode: Mode) -> RomImage {
    let bcd = serial.to_bcd();
    let checksum = checksum(&bcd);
    let checksum_bytes = checksum.to_le_bytes();

    let mut sequence = Vec::with_capacity(mode.sequence_len());
    match mode {
        Mode::Plain => {
            sequence.extend_from_slice(&bcd);
            sequence.extend_from_slice(&checksum_bytes);
        }
        Mode::Interleaved => {
            sequence.extend(interleave(&bcd));
            sequence.extend(interleave(&checksum_bytes));
        }
    }

    let mut bytes = Vec::with_capacity(mode.image_len());
    for _ in 0..SEQUENCE_COPIES {
        bytes.extend_from_slice(&sequence);
    }
    bytes.extend(mode.footer());

    RomImage {
        mode,
        checksum,
        bytes,
    }
}

/// Format bytes as `AA BB CC`.
pub fn hex_dump(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| hex::encode_upper([*b]))
        .collect::<Vec<_>>()
        .join(" ")
}
