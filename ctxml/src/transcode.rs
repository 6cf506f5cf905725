//! UTF-16 to UTF-8 transcoding with byte-order-mark detection.
//!
//! The input is a buffer of 16-bit code units terminated by a zero unit or
//! by the end of the buffer. A leading BOM selects the unit byte order; a
//! buffer without one is not UTF-16 and is left for the caller to parse as
//! byte text.

use tracing::trace;

use crate::error::{EncodingError, Result};

/// Byte order of the code units following the BOM
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endian {
    Little,
    Big,
}

impl Endian {
    /// Detect the byte order from a leading BOM (`FF FE` or `FE FF`)
    pub fn from_bom(bytes: &[u8]) -> Option<Self> {
        match bytes {
            [0xFF, 0xFE, ..] => Some(Self::Little),
            [0xFE, 0xFF, ..] => Some(Self::Big),
            _ => None,
        }
    }

    fn unit(self, pair: &[u8]) -> u16 {
        let pair = match pair {
            [a, b] => [*a, *b],
            _ => [0, 0],
        };
        match self {
            Self::Little => u16::from_le_bytes(pair),
            Self::Big => u16::from_be_bytes(pair),
        }
    }
}

/// Transcode `bytes` when it starts with a UTF-16 BOM.
///
/// Returns `Ok(None)` when there is no BOM, meaning no transcoding was
/// performed. Any decoding failure aborts the whole conversion.
pub fn decode_utf16_bom(bytes: &[u8]) -> Result<Option<String>> {
    let Some(endian) = Endian::from_bom(bytes) else {
        return Ok(None);
    };
    trace!(?endian, "utf-16 byte order mark found");
    decode_utf16(bytes.get(2..).unwrap_or_default(), endian).map(Some)
}

/// Decode UTF-16 code units (no BOM) into a UTF-8 string.
///
/// Decoding stops at the first zero unit. A high surrogate must be followed
/// by a low surrogate and a low surrogate may not appear on its own.
pub fn decode_utf16(bytes: &[u8], endian: Endian) -> Result<String> {
    let mut units = Vec::with_capacity(bytes.len() / 2);
    let mut pairs = bytes.chunks_exact(2);
    let mut terminated = false;
    for pair in pairs.by_ref() {
        let unit = endian.unit(pair);
        if unit == 0 {
            terminated = true;
            break;
        }
        units.push(unit);
    }
    if !terminated && pairs.remainder().iter().any(|&b| b != 0) {
        return Err(EncodingError::TruncatedUnit.into());
    }

    // Worst case is four bytes per unit, trimmed once decoding finishes
    let mut out = String::with_capacity(units.len().saturating_mul(4));
    for decoded in char::decode_utf16(units.iter().copied()) {
        let ch =
            decoded.map_err(|e| EncodingError::UnpairedSurrogate(e.unpaired_surrogate()))?;
        out.push(ch);
    }
    out.shrink_to_fit();
    Ok(out)
}
