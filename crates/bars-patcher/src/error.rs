//! Error types for the patcher.
//!
//! Every variant is fatal and maps to the same process exit code.

use bars_formats::{CapacityError, Fingerprint, FormatError};
use std::path::PathBuf;
use thiserror::Error;

/// Exit code reported for every failure
pub const EXIT_FAILURE: u8 = 255;

/// Role a file plays in a patch run, used in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileRole {
    /// BARS archive to read
    InputArchive,
    /// BARS archive to write
    OutputArchive,
    /// BWAV file whose header is currently embedded in the archive
    OriginalRecord,
    /// BWAV file providing the replacement header
    PatchRecord,
}

impl std::fmt::Display for FileRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::InputArchive => "input BARS file",
            Self::OutputArchive => "output BARS file",
            Self::OriginalRecord => "original BWAV file",
            Self::PatchRecord => "patch BWAV file",
        })
    }
}

/// Patch run errors.
#[derive(Debug, Error)]
pub enum PatchError {
    /// A BWAV file is malformed
    #[error("Bad {role}: {source}")]
    Format {
        /// Which file failed to parse
        role: FileRole,
        /// Underlying format error
        #[source]
        source: FormatError,
    },

    /// Original and patch headers declare different channel layouts
    #[error("BWAV channel counts don't match: original has {original}, patch has {patch}")]
    ChannelMismatch {
        /// Channel count of the original record
        original: u16,
        /// Channel count of the patch record
        patch: u16,
    },

    /// A file could not be read or written
    #[error("Unable to access {role} {}: {source}", .path.display())]
    Io {
        /// Which file failed
        role: FileRole,
        /// Path as given on the command line
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The replacement header does not fit at the located offset
    #[error("{0}. Is the BARS file valid?")]
    Capacity(#[from] CapacityError),

    /// No embedded record carries the original fingerprint
    #[error("Unable to find record with fingerprint {fingerprint} in input BARS file")]
    NotFound {
        /// Fingerprint that was searched for
        fingerprint: Fingerprint,
    },
}

impl PatchError {
    /// Process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        EXIT_FAILURE
    }
}

/// Result type for patch runs
pub type PatchResult<T> = Result<T, PatchError>;
