//! ROM image decoder and integrity report
//!
//! Decoding never fails on a checksum or footer mismatch: those come back as
//! [`Status::Invalid`] fields so the caller can show stored and computed values side by
//! side. Images too short to hold three sequences, or longer than a full image, are
//! rejected with [`DecodeError`]. A short footer is still decoded and reported INVALID.
//!
//! Just the first sequence is decoded. The two later copies exist for physical
//! robustness of the PROM and are not compared against it.

use serde::Serialize;

use crate::interleave::is_interleaved;
use crate::serial::render_bcd;
use crate::{BCD_BLOCK_LEN, Mode, SEQUENCE_LEN, checksum, deinterleave};

/// Errors for images whose structure cannot be decoded
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// Not enough bytes for three sequences in the detected mode
    #[error("image is {len} bytes, {mode} layout needs at least {required} bytes for three sequences")]
    Truncated {
        len: usize,
        required: usize,
        mode: Mode,
    },

    /// More bytes than a complete image in the detected mode
    #[error("image is {len} bytes, {mode} layout is exactly {expected} bytes")]
    TrailingData {
        len: usize,
        expected: usize,
        mode: Mode,
    },
}

/// Result of an integrity comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Ok,
    Invalid,
}

impl Status {
    fn from_match(matches: bool) -> Self {
        if matches { Status::Ok } else { Status::Invalid }
    }

    pub fn is_ok(self) -> bool {
        self == Status::Ok
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Ok => f.write_str("OK"),
            Status::Invalid => f.write_str("INVALID"),
        }
    }
}

/// Everything recovered from a ROM image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RomReport {
    /// Layout detected from the zero filler bytes
    pub mode: Mode,
    /// 12-digit serial with leading zeros
    pub serial: String,
    /// Checksum read from the first sequence
    pub stored_checksum: u16,
    /// Checksum recomputed over the stored BCD block
    pub computed_checksum: u16,
    pub checksum_status: Status,
    /// Footer bytes with any filler removed
    #[serde(serialize_with = "serialize_hex")]
    pub footer: Vec<u8>,
    pub footer_status: Status,
}

impl RomReport {
    /// Both checksum and footer match.
    pub fn is_valid(&self) -> bool {
        self.checksum_status.is_ok() && self.footer_status.is_ok()
    }
}

fn serialize_hex<T, S>(bytes: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: AsRef<[u8]>,
    S: serde::Serializer,
{
    serializer.serialize_str(&hex::encode_upper(bytes.as_ref()))
}

/// Work out the image layout.
///
/// Interleaved iff every odd-indexed byte of the whole input is zero. Empty and all-zero
/// inputs therefore count as interleaved.
pub fn detect_mode(data: &[u8]) -> Mode {
    Mode::from_emulator_flag(is_interleaved(data))
}

/// Decode a ROM image and check its integrity.
pub fn decode(data: &[u8]) -> Result<RomReport, DecodeError> {
    let mode = detect_mode(data);

    let body_len = mode.body_len();
    if data.len() < body_len {
        return Err(DecodeError::Truncated {
            len: data.len(),
            required: body_len,
            mode,
        });
    }
    let image_len = mode.image_len();
    if data.len() > image_len {
        return Err(DecodeError::TrailingData {
            len: data.len(),
            expected: image_len,
            mode,
        });
    }
    let (body, footer_raw) = data.split_at(body_len);

    let sequence = match mode {
        Mode::Plain => body[..SEQUENCE_LEN].to_vec(),
        Mode::Interleaved => deinterleave(&body[..mode.sequence_len()]),
    };
    let (bcd, stored) = sequence.split_at(BCD_BLOCK_LEN);

    let stored_checksum = u16::from_le_bytes([stored[0], stored[1]]);
    let computed_checksum = checksum(bcd);

    let footer = match mode {
        Mode::Plain => footer_raw.to_vec(),
        Mode::Interleaved => deinterleave(footer_raw),
    };

    Ok(RomReport {
        mode,
        serial: render_bcd(bcd),
        stored_checksum,
        computed_checksum,
        checksum_status: Status::from_match(stored_checksum == computed_checksum),
        footer,
        footer_status: Status::from_match(footer_raw == mode.footer().as_slice()),
    })
}
