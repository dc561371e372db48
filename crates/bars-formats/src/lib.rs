//! BWAV header decoding and BARS record patching
//!
#![allow(clippy::cast_possible_truncation)] // Intentional for binary format parsing
#![allow(clippy::cast_possible_wrap)] // Signed byte reinterpretation
#![allow(clippy::cast_lossless)] // Sometimes clearer than From
#![allow(clippy::uninlined_format_args)] // Backwards compatibility
#![allow(clippy::doc_markdown)] // BWAV/BARS terms don't need backticks
#![allow(clippy::module_name_repetitions)] // Clear naming is preferred
#![allow(clippy::return_self_not_must_use)] // Builder patterns
//! This crate decodes the headers of Nintendo BWAV audio files and patches
//! the copies of those headers embedded in BARS archives.
//!
//! # Modules
//!
//! - **decode**: bounds-checked integer, marker and string readers
//! - **bwav**: BWAV prologue parsing, byte-order detection and record building
//! - **bars**: fingerprint search and in-place record overwrite
//!
//! # Example
//!
//! ```rust
//! use bars_formats::bars;
//! use bars_formats::bwav::{BwavHeader, BwavRecordBuilder, PatchRecord, RecordKind};
//!
//! let original = BwavRecordBuilder::new(1).crc32(0x1234_5678).build()?;
//! let replacement = BwavRecordBuilder::new(1).channel_fill(0x80).build()?;
//!
//! // Archive with the original header embedded at offset 16
//! let mut archive = vec![0u8; 16];
//! archive.extend_from_slice(&original);
//!
//! let header = BwavHeader::inspect(&original, RecordKind::Original)?;
//! let fingerprint = header.fingerprint.ok_or("no fingerprint")?;
//! let offset = bars::locate(&archive, fingerprint.as_bytes()).ok_or("not found")?;
//! assert_eq!(offset, 16);
//!
//! let record = PatchRecord::from_bytes(&replacement)?;
//! bars::apply(&mut archive, offset, &record.bytes)?;
//! assert_eq!(&archive[16..], replacement.as_slice());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]

pub mod bars;
pub mod bwav;
pub mod decode;
/// Error types
pub mod error;

pub use bars::PatchRegion;
pub use bwav::{BwavHeader, Fingerprint, PatchRecord, RecordKind};
pub use decode::Endianness;
pub use error::{CapacityError, DecodeError, FormatError};
