//! Error types for BWAV header decoding and BARS patching

use thiserror::Error;

/// Out-of-range read from a byte buffer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Requested range extends past the end of the buffer
    #[error("read of {length} bytes at offset {start:#x} exceeds buffer of {available} bytes")]
    OutOfBounds {
        /// First byte requested
        start: usize,
        /// Number of bytes requested
        length: usize,
        /// Buffer length
        available: usize,
    },
}

/// Malformed BWAV record file
#[derive(Debug, Error)]
pub enum FormatError {
    /// File does not start with the `BWAV` signature
    #[error("bad magic: expected {expected:?}, got {actual:?}")]
    BadMagic {
        /// Expected signature
        expected: &'static str,
        /// Signature found, NUL bytes shown as spaces
        actual: String,
    },

    /// File is shorter than the region that has to be read
    #[error("truncated {what}: need {needed} bytes, got {actual}")]
    Truncated {
        /// Region being read
        what: &'static str,
        /// Bytes required
        needed: usize,
        /// Bytes available
        actual: usize,
    },

    /// Header was inspected without reading its fingerprint
    #[error("header has no fingerprint; it was not inspected as an original record")]
    MissingFingerprint,

    /// Field read failed
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Fixed prologue could not be read
    #[error("binary format error: {0}")]
    Binary(#[from] binrw::Error),
}

/// Not enough room in the archive for the replacement record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "not enough space for header in archive: need {needed} bytes at offset {offset:#x}, {available} available"
)]
pub struct CapacityError {
    /// Offset the record would be written at
    pub offset: usize,
    /// Length of the replacement record
    pub needed: usize,
    /// Bytes between `offset` and the end of the archive
    pub available: usize,
}

/// Result type for byte decoding
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Result type for header inspection
pub type FormatResult<T> = Result<T, FormatError>;
