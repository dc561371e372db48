//! BARS archive patching
//!
//! A BARS archive embeds copies of BWAV headers. This module does not parse
//! the archive structure: it finds an embedded record by its CRC32
//! fingerprint and overwrites it in place.
//!
//! Each embedded record starts [`RECORD_PROLOGUE_SIZE`] bytes before its
//! fingerprint field, so [`locate`] reports the record start rather than the
//! fingerprint position.
//!
//! # Usage
//!
//! ```rust
//! use bars_formats::bars::{apply, locate};
//!
//! let mut archive = vec![0u8; 128];
//! archive[40..44].copy_from_slice(&[0xDE, 0xAD, 0xBE, 0xEF]);
//!
//! let offset = locate(&archive, &[0xDE, 0xAD, 0xBE, 0xEF]).ok_or("not found")?;
//! assert_eq!(offset, 32);
//!
//! let region = apply(&mut archive, offset, &[0x42; 16])?;
//! assert_eq!(region.end(), 48);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod apply;
mod locate;

pub use apply::apply;
pub use locate::{locate, locate_fingerprint};

/// Bytes between the start of an embedded record and its fingerprint field
pub const RECORD_PROLOGUE_SIZE: usize = 8;

/// Byte range of an archive overwritten by a patch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatchRegion {
    /// First byte written
    pub offset: usize,
    /// Number of bytes written
    pub length: usize,
}

impl PatchRegion {
    /// One past the last byte written
    pub const fn end(&self) -> usize {
        self.offset + self.length
    }

    /// Whether no bytes were written
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Whether `index` falls inside the region
    pub const fn contains(&self, index: usize) -> bool {
        index >= self.offset && index < self.end()
    }
}
