//! Replacement record taken from a patch BWAV file

use super::header::{BwavHeader, RecordKind};
use crate::decode::read_slice;
use crate::error::{FormatError, FormatResult};

/// The byte run spliced into an archive, with its parsed header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchRecord {
    /// Header of the patch file
    pub header: BwavHeader,

    /// First `header.total_length` bytes of the patch file
    pub bytes: Vec<u8>,
}

impl PatchRecord {
    /// Inspect a patch file and take its full header and channel table
    pub fn from_bytes(data: &[u8]) -> FormatResult<Self> {
        let header = BwavHeader::inspect(data, RecordKind::Patch)?;
        Self::take(header, data)
    }

    /// Take the record described by an already inspected header
    pub fn take(header: BwavHeader, data: &[u8]) -> FormatResult<Self> {
        let bytes = read_slice(data, 0, header.total_length).map_err(|_| {
            FormatError::Truncated {
                what: "BWAV channel table",
                needed: header.total_length,
                actual: data.len(),
            }
        })?;
        Ok(Self { header, bytes })
    }

    /// Length of the record in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the record is empty (never true for a parsed record)
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
