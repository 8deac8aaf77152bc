//! Serial number validation and BCD packing

use serde::Serialize;

use crate::{BCD_BLOCK_LEN, SERIAL_DIGITS};

/// Reasons a serial string is rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SerialError {
    #[error("serial number is empty")]
    Empty,

    #[error("serial number has {0} digits (at most 12 allowed)")]
    TooLong(usize),

    #[error("serial number contains non-digit character {0:?}")]
    NonDigit(char),
}

/// Check whether `input` is an acceptable serial (1 to 12 ASCII digits).
///
/// Front ends use this to re-prompt without duplicating the parsing rules.
pub fn is_valid_serial(input: &str) -> bool {
    Serial::parse(input).is_ok()
}

/// A serial number zero-padded to exactly 12 ASCII digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct Serial([u8; SERIAL_DIGITS]);

impl Serial {
    /// Validate and left-pad a serial with zeros.
    pub fn parse(input: &str) -> Result<Self, SerialError> {
        if input.is_empty() {
            return Err(SerialError::Empty);
        }
        if let Some(c) = input.chars().find(|c| !c.is_ascii_digit()) {
            return Err(SerialError::NonDigit(c));
        }
        // All ASCII from here, so bytes == chars
        let digits = input.as_bytes();
        if digits.len() > SERIAL_DIGITS {
            return Err(SerialError::TooLong(digits.len()));
        }

        let mut padded = [b'0'; SERIAL_DIGITS];
        padded[SERIAL_DIGITS - digits.len()..].copy_from_slice(digits);
        Ok(Self(padded))
    }

    /// The padded 12-digit form.
    pub fn as_str(&self) -> &str {
        // Only ASCII digits are ever stored
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// Pack digit pairs into bytes and store them most-significant pair last.
    pub fn to_bcd(&self) -> [u8; BCD_BLOCK_LEN] {
        let mut block = [0u8; BCD_BLOCK_LEN];
        for (byte, pair) in block.iter_mut().zip(self.0.chunks_exact(2)) {
            *byte = ((pair[0] - b'0') << 4) | (pair[1] - b'0');
        }
        block.reverse();
        block
    }
}

impl std::fmt::Display for Serial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Serial {
    type Err = SerialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Serial> for String {
    fn from(serial: Serial) -> Self {
        serial.as_str().to_owned()
    }
}

/// Render a stored (reversed) BCD block back into digits.
///
/// Nibbles above 9 only occur in corrupt images; they render as uppercase hex so the
/// caller can still show what was read.
pub(crate) fn render_bcd(block: &[u8]) -> String {
    block
        .iter()
        .rev()
        .flat_map(|&b| [b >> 4, b & 0x0F])
        .filter_map(|nibble| char::from_digit(u32::from(nibble), 16))
        .map(|c| c.to_ascii_uppercase())
        .collect()
}
