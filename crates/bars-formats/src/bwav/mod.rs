//! BWAV record headers
//!
//! A BWAV file starts with a 16-byte prologue followed by one 76-byte
//! channel info entry per channel. Byte order is not stored as a flag: it is
//! inferred from the byte-order marker at offset 0x04, whose big-endian
//! reading decodes to `-257`.
//!
//! # Usage
//!
//! ```rust
//! use bars_formats::bwav::{BwavHeader, BwavRecordBuilder, RecordKind};
//! use bars_formats::decode::Endianness;
//!
//! let data = BwavRecordBuilder::new(2)
//!     .endianness(Endianness::Little)
//!     .crc32(0xDEAD_BEEF)
//!     .build()?;
//!
//! let header = BwavHeader::inspect(&data, RecordKind::Original)?;
//! assert_eq!(header.channel_count, 2);
//! assert_eq!(header.total_length, 0x10 + 0x4C * 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod builder;
mod header;
mod record;

pub use builder::BwavRecordBuilder;
pub use header::{
    BIG_ENDIAN_SENTINEL, BWAV_MAGIC, BYTE_ORDER_MARK, BwavHeader, BwavPrologue, CHANNEL_INFO_SIZE,
    Fingerprint, PROLOGUE_SIZE, RecordKind, detect_endianness, header_length,
};
pub use record::PatchRecord;
