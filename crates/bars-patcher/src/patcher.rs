//! Patch pipeline.
//!
//! [`patch_archive`] runs the whole operation on in-memory buffers;
//! [`Patcher`] wraps it with file access. The output file is only created
//! after the in-memory patch has succeeded.

use crate::config::PatchConfig;
use crate::error::{FileRole, PatchError, PatchResult};
use bars_formats::bars::{self, PatchRegion};
use bars_formats::{BwavHeader, Endianness, Fingerprint, FormatError, PatchRecord, RecordKind};
use std::path::{Path, PathBuf};

/// Summary of a successful patch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchReport {
    /// Channel count shared by both headers
    pub channel_count: u16,
    /// Bytes written into the archive
    pub patch_length: usize,
    /// Fingerprint of the replaced record
    pub fingerprint: Fingerprint,
    /// Byte order of the original BWAV file
    pub original_endianness: Endianness,
    /// Byte order of the patch BWAV file
    pub patch_endianness: Endianness,
    /// Archive bytes that were overwritten
    pub region: PatchRegion,
}

/// Patched archive together with its report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchOutcome {
    /// Archive contents after the patch
    pub archive: Vec<u8>,
    /// What was changed
    pub report: PatchReport,
}

/// Replace the record matching `original` in `archive` with the header of `patch`.
///
/// `original` and `patch` are the contents of the two BWAV files; only their
/// headers are read.
pub fn patch_archive(
    mut archive: Vec<u8>,
    original: &[u8],
    patch: &[u8],
) -> PatchResult<PatchOutcome> {
    let original_header = BwavHeader::inspect(original, RecordKind::Original)
        .map_err(format_error(FileRole::OriginalRecord))?;
    let patch_header =
        BwavHeader::inspect(patch, RecordKind::Patch).map_err(format_error(FileRole::PatchRecord))?;
    tracing::debug!(
        "original BWAV: {}, version {}; patch BWAV: {}, version {}",
        original_header.endianness,
        original_header.version,
        patch_header.endianness,
        patch_header.version
    );

    if original_header.channel_count != patch_header.channel_count {
        return Err(PatchError::ChannelMismatch {
            original: original_header.channel_count,
            patch: patch_header.channel_count,
        });
    }

    let fingerprint = original_header.fingerprint.ok_or(PatchError::Format {
        role: FileRole::OriginalRecord,
        source: FormatError::MissingFingerprint,
    })?;

    let record =
        PatchRecord::take(patch_header, patch).map_err(format_error(FileRole::PatchRecord))?;
    tracing::info!(
        "Channel count: {} Patch length: {}",
        record.header.channel_count,
        record.len()
    );

    tracing::info!(
        "Original file hash: {}, searching in BARS ({} bytes)...",
        fingerprint,
        archive.len()
    );
    let offset = bars::locate_fingerprint(&archive, &fingerprint)
        .ok_or(PatchError::NotFound { fingerprint })?;
    tracing::info!("File found at offset {:#x}", offset);

    let region = bars::apply(&mut archive, offset, &record.bytes)?;
    tracing::info!(
        "Wrote patch to {:#x}..{:#x}",
        region.offset,
        region.end()
    );

    Ok(PatchOutcome {
        archive,
        report: PatchReport {
            channel_count: record.header.channel_count,
            patch_length: record.len(),
            fingerprint,
            original_endianness: original_header.endianness,
            patch_endianness: record.header.endianness,
            region,
        },
    })
}

/// File-level patch runner.
#[derive(Debug, Clone)]
pub struct Patcher {
    input: PathBuf,
    output: PathBuf,
    original: PathBuf,
    patch: PathBuf,
}

impl Patcher {
    /// Create a patcher for the paths in `config`.
    #[must_use]
    pub fn new(config: PatchConfig) -> Self {
        Self {
            input: config.input,
            output: config.output,
            original: config.original,
            patch: config.patch,
        }
    }

    /// Read all inputs, patch in memory, then write the output archive.
    pub fn run(&self) -> PatchResult<PatchReport> {
        let archive = read_file(FileRole::InputArchive, &self.input)?;
        let original = read_file(FileRole::OriginalRecord, &self.original)?;
        let patch = read_file(FileRole::PatchRecord, &self.patch)?;

        let outcome = patch_archive(archive, &original, &patch)?;

        tracing::info!("Writing patch to {}...", self.output.display());
        std::fs::write(&self.output, &outcome.archive).map_err(|source| PatchError::Io {
            role: FileRole::OutputArchive,
            path: self.output.clone(),
            source,
        })?;
        tracing::info!("Done");

        Ok(outcome.report)
    }
}

fn format_error(role: FileRole) -> impl Fn(FormatError) -> PatchError {
    move |source| PatchError::Format { role, source }
}

fn read_file(role: FileRole, path: &Path) -> PatchResult<Vec<u8>> {
    let data = std::fs::read(path).map_err(|source| PatchError::Io {
        role,
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("read {} bytes from {} {}", data.len(), role, path.display());
    Ok(data)
}
