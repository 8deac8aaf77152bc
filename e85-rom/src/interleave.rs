//! Zero-byte interleaving for the Xhomer 16-bit cell layout

/// Insert a `0x00` after every byte (`AB` becomes `A0B0`).
pub fn interleave(data: &[u8]) -> Vec<u8> {
    data.iter().flat_map(|&b| [b, 0x00]).collect()
}

/// Keep the even-indexed bytes, dropping the filler.
///
/// Only inverts [`interleave`]: any non-zero odd byte is discarded without complaint.
pub fn deinterleave(data: &[u8]) -> Vec<u8> {
    data.iter().step_by(2).copied().collect()
}

/// True when every odd-indexed byte is `0x00`.
///
/// Vacuously true for empty and single-byte input.
pub(crate) fn is_interleaved(data: &[u8]) -> bool {
    data.iter().skip(1).step_by(2).all(|&b| b == 0x00)
}
