//! Byte-level decoding helpers for BWAV and BARS data
//!
//! Every reader borrows the source buffer and returns an owned value, so the
//! helpers can be called repeatedly on the same buffer without aliasing.
//! All reads are bounds-checked and report [`DecodeError::OutOfBounds`]
//! rather than panicking.

use crate::error::{DecodeError, DecodeResult};

/// Byte order of a single record file
///
/// Byte order is a per-file property: an original record and its
/// replacement may use different orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endianness {
    /// Most significant byte first
    Big,
    /// Least significant byte first
    Little,
}

impl Endianness {
    /// Matching `binrw` endianness for struct-level reads
    pub const fn to_binrw(self) -> binrw::Endian {
        match self {
            Self::Big => binrw::Endian::Big,
            Self::Little => binrw::Endian::Little,
        }
    }
}

impl std::fmt::Display for Endianness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Big => f.write_str("big-endian"),
            Self::Little => f.write_str("little-endian"),
        }
    }
}

/// Widest integer accepted by [`read_unsigned`], in bytes
pub const MAX_UNSIGNED_WIDTH: usize = 4;

/// Borrow `length` bytes starting at `start`
fn range(buffer: &[u8], start: usize, length: usize) -> DecodeResult<&[u8]> {
    start
        .checked_add(length)
        .and_then(|end| buffer.get(start..end))
        .ok_or(DecodeError::OutOfBounds {
            start,
            length,
            available: buffer.len(),
        })
}

/// Copy `length` bytes starting at `start`
pub fn read_slice(buffer: &[u8], start: usize, length: usize) -> DecodeResult<Vec<u8>> {
    range(buffer, start, length).map(<[u8]>::to_vec)
}

/// Read an unsigned integer of up to four bytes
///
/// `length` is clamped to [`MAX_UNSIGNED_WIDTH`]. For [`Endianness::Big`] the
/// byte at `start` is the most significant; for [`Endianness::Little`] it is
/// the least significant.
pub fn read_unsigned(
    buffer: &[u8],
    start: usize,
    length: usize,
    endianness: Endianness,
) -> DecodeResult<u32> {
    let bytes = range(buffer, start, length.min(MAX_UNSIGNED_WIDTH))?;
    let fold = |acc: u32, &b: &u8| (acc << 8) | u32::from(b);
    Ok(match endianness {
        Endianness::Big => bytes.iter().fold(0, fold),
        Endianness::Little => bytes.iter().rev().fold(0, fold),
    })
}

/// Read a 16-bit value as a signed high byte and an unsigned low byte
///
/// With [`Endianness::Big`] the byte at `start` is the signed high byte and
/// the byte at `start + 1` the unsigned low byte; [`Endianness::Little`]
/// swaps them. The result is `low + high * 256`.
///
/// This is how the BWAV byte-order marker is interpreted: `[0xFE, 0xFF]`
/// decodes to `-257` only when read as big-endian.
pub fn read_signed_sample16(
    buffer: &[u8],
    start: usize,
    endianness: Endianness,
) -> DecodeResult<i32> {
    let bytes = range(buffer, start, 2)?;
    let (high, low) = match endianness {
        Endianness::Big => (bytes[0], bytes[1]),
        Endianness::Little => (bytes[1], bytes[0]),
    };
    Ok(i32::from(low) + i32::from(high as i8) * 256)
}

/// Read `length` bytes as text, with NUL bytes replaced by spaces
///
/// Each byte maps to exactly one character, so the result always holds
/// `length` characters and never contains an embedded NUL.
pub fn read_padded_string(buffer: &[u8], start: usize, length: usize) -> DecodeResult<String> {
    let bytes = range(buffer, start, length)?;
    Ok(bytes
        .iter()
        .map(|&b| if b == 0 { ' ' } else { char::from(b) })
        .collect())
}
