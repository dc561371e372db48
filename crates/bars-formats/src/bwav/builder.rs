//! BWAV record builder
//!
//! Produces a prologue followed by a channel table of the declared size.
//! Channel entries are filled with a repeating byte pattern; their contents
//! are opaque to the patcher.

use super::header::{BwavPrologue, CHANNEL_INFO_SIZE, header_length};
use crate::decode::Endianness;
use crate::error::FormatResult;

/// Builder for BWAV header records
#[derive(Debug, Clone)]
pub struct BwavRecordBuilder {
    endianness: Endianness,
    version: u16,
    crc32: u32,
    prefetch: bool,
    channel_count: u16,
    channel_fill: u8,
}

impl BwavRecordBuilder {
    /// Create a big-endian builder for the given channel count
    pub fn new(channel_count: u16) -> Self {
        Self {
            endianness: Endianness::Big,
            version: 1,
            crc32: 0,
            prefetch: false,
            channel_count,
            channel_fill: 0,
        }
    }

    /// Set the byte order
    pub fn endianness(mut self, endianness: Endianness) -> Self {
        self.endianness = endianness;
        self
    }

    /// Set the format version
    pub fn version(mut self, version: u16) -> Self {
        self.version = version;
        self
    }

    /// Set the CRC32 fingerprint
    pub fn crc32(mut self, crc32: u32) -> Self {
        self.crc32 = crc32;
        self
    }

    /// Set the prefetch flag
    pub fn prefetch(mut self, prefetch: bool) -> Self {
        self.prefetch = prefetch;
        self
    }

    /// Set the seed byte for the channel table pattern
    pub fn channel_fill(mut self, channel_fill: u8) -> Self {
        self.channel_fill = channel_fill;
        self
    }

    /// Build the prologue and channel table
    pub fn build(&self) -> FormatResult<Vec<u8>> {
        let mut prologue = BwavPrologue::new(self.version, self.crc32, self.channel_count);
        prologue.prefetch = u16::from(self.prefetch);

        let mut out = prologue.build(self.endianness)?;
        out.reserve(header_length(self.channel_count) - out.len());
        for channel in 0..usize::from(self.channel_count) {
            out.extend(
                (0..CHANNEL_INFO_SIZE)
                    .map(|i| self.channel_fill.wrapping_add((channel * CHANNEL_INFO_SIZE + i) as u8)),
            );
        }
        Ok(out)
    }
}
