//! BWAV header prologue and inspection
//!
//! Layout (byte order given by the marker at 0x04):
//! ```text
//! offset 0x00: [u8; 4] magic           ("BWAV")
//! offset 0x04: u16     byte_order_mark (0xFEFF in file order)
//! offset 0x06: u16     version
//! offset 0x08: u32     crc32           (content fingerprint)
//! offset 0x0C: u16     prefetch
//! offset 0x0E: u16     channel_count
//! offset 0x10: [ChannelInfo; channel_count] (0x4C bytes each)
//! ```

use crate::decode::{
    Endianness, read_padded_string, read_signed_sample16, read_slice, read_unsigned,
};
use crate::error::{FormatError, FormatResult};
use binrw::{BinRead, BinWrite};
use std::io::Cursor;

/// BWAV file signature
pub const BWAV_MAGIC: &str = "BWAV";

/// Size of the fixed prologue preceding the channel table
pub const PROLOGUE_SIZE: usize = 0x10;

/// Size of one channel info entry
pub const CHANNEL_INFO_SIZE: usize = 0x4C;

/// Byte-order mark value as read in the file's own byte order
pub const BYTE_ORDER_MARK: u16 = 0xFEFF;

/// Offset of the byte-order marker
pub const BYTE_ORDER_OFFSET: usize = 0x04;

/// Offset of the CRC32 fingerprint
pub const FINGERPRINT_OFFSET: usize = 0x08;

/// Offset of the channel count
pub const CHANNEL_COUNT_OFFSET: usize = 0x0E;

/// Marker value that identifies a big-endian file
///
/// The marker bytes `FE FF` read as a signed high byte and an unsigned low
/// byte give `-2 * 256 + 255`.
pub const BIG_ENDIAN_SENTINEL: i32 = -257;

/// Total header length (prologue plus channel table) for a channel count
pub const fn header_length(channel_count: u16) -> usize {
    PROLOGUE_SIZE + CHANNEL_INFO_SIZE * channel_count as usize
}

/// Detect byte order from the marker at [`BYTE_ORDER_OFFSET`]
pub fn detect_endianness(data: &[u8]) -> FormatResult<Endianness> {
    let marker = read_signed_sample16(data, BYTE_ORDER_OFFSET, Endianness::Big)?;
    Ok(if marker == BIG_ENDIAN_SENTINEL {
        Endianness::Big
    } else {
        Endianness::Little
    })
}

/// Fixed 16-byte BWAV prologue
#[derive(Debug, Clone, PartialEq, Eq, BinRead, BinWrite)]
pub struct BwavPrologue {
    /// File signature
    pub magic: [u8; 4],

    /// Byte-order mark, [`BYTE_ORDER_MARK`] when read in file order
    pub byte_order_mark: u16,

    /// Format version
    pub version: u16,

    /// CRC32 of the sample data, used as the content fingerprint
    pub crc32: u32,

    /// Non-zero when the file carries prefetch data only
    pub prefetch: u16,

    /// Number of channel info entries following the prologue
    pub channel_count: u16,
}

impl BwavPrologue {
    /// Create a prologue with the standard magic and byte-order mark
    pub fn new(version: u16, crc32: u32, channel_count: u16) -> Self {
        Self {
            magic: *b"BWAV",
            byte_order_mark: BYTE_ORDER_MARK,
            version,
            crc32,
            prefetch: 0,
            channel_count,
        }
    }

    /// Read the prologue in the given byte order
    pub fn parse(data: &[u8], endianness: Endianness) -> FormatResult<Self> {
        let mut cursor = Cursor::new(data);
        Ok(Self::read_options(&mut cursor, endianness.to_binrw(), ())?)
    }

    /// Write the prologue in the given byte order
    pub fn build(&self, endianness: Endianness) -> FormatResult<Vec<u8>> {
        let mut cursor = Cursor::new(Vec::with_capacity(PROLOGUE_SIZE));
        self.write_options(&mut cursor, endianness.to_binrw(), ())?;
        Ok(cursor.into_inner())
    }
}

/// Which side of the patch a record file plays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// Record currently embedded in the archive; supplies the fingerprint
    Original,
    /// Replacement record spliced into the archive
    Patch,
}

/// Content fingerprint of a record (its CRC32 field)
///
/// Searches compare the raw bytes; [`Fingerprint::value`] is only used for
/// display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint {
    bytes: [u8; 4],
    endianness: Endianness,
}

impl Fingerprint {
    /// Wrap raw fingerprint bytes as stored in a file of the given byte order
    pub const fn new(bytes: [u8; 4], endianness: Endianness) -> Self {
        Self { bytes, endianness }
    }

    /// Raw bytes, in file order
    pub const fn as_bytes(&self) -> &[u8; 4] {
        &self.bytes
    }

    /// Numeric value in the source file's byte order
    pub const fn value(&self) -> u32 {
        match self.endianness {
            Endianness::Big => u32::from_be_bytes(self.bytes),
            Endianness::Little => u32::from_le_bytes(self.bytes),
        }
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:x}", self.value())
    }
}

/// Fields extracted from a BWAV record file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BwavHeader {
    /// Role the file was inspected for
    pub kind: RecordKind,

    /// Byte order detected from the marker field
    pub endianness: Endianness,

    /// Format version
    pub version: u16,

    /// Whether the prefetch flag is set
    pub prefetch: bool,

    /// Declared number of channels
    pub channel_count: u16,

    /// CRC32 fingerprint, only read for [`RecordKind::Original`]
    pub fingerprint: Option<Fingerprint>,

    /// Prologue plus channel table length in bytes
    pub total_length: usize,
}

impl BwavHeader {
    /// Inspect the start of a record file
    ///
    /// The magic is checked before anything else is decoded.
    pub fn inspect(data: &[u8], kind: RecordKind) -> FormatResult<Self> {
        let magic = read_padded_string(data, 0, BWAV_MAGIC.len()).map_err(|_| {
            FormatError::Truncated {
                what: "BWAV magic",
                needed: BWAV_MAGIC.len(),
                actual: data.len(),
            }
        })?;
        if magic != BWAV_MAGIC {
            return Err(FormatError::BadMagic {
                expected: BWAV_MAGIC,
                actual: magic,
            });
        }

        if data.len() < PROLOGUE_SIZE {
            return Err(FormatError::Truncated {
                what: "BWAV prologue",
                needed: PROLOGUE_SIZE,
                actual: data.len(),
            });
        }

        let endianness = detect_endianness(data)?;
        let channel_count = read_unsigned(data, CHANNEL_COUNT_OFFSET, 2, endianness)? as u16;

        let fingerprint = match kind {
            RecordKind::Original => {
                let mut bytes = [0u8; 4];
                bytes.copy_from_slice(&read_slice(data, FINGERPRINT_OFFSET, 4)?);
                Some(Fingerprint::new(bytes, endianness))
            }
            RecordKind::Patch => None,
        };

        let prologue = BwavPrologue::parse(data, endianness)?;
        if prologue.byte_order_mark != BYTE_ORDER_MARK {
            tracing::debug!(
                "unexpected byte-order mark {:#06x}, treating file as {}",
                prologue.byte_order_mark,
                endianness
            );
        }

        Ok(Self {
            kind,
            endianness,
            version: prologue.version,
            prefetch: prologue.prefetch != 0,
            channel_count,
            fingerprint,
            total_length: header_length(channel_count),
        })
    }
}
