//! Fingerprint search over a BARS archive buffer

use super::RECORD_PROLOGUE_SIZE;
use crate::bwav::Fingerprint;

/// Find the record whose fingerprint field matches `fingerprint`
///
/// Returns the offset of the record start, which is
/// [`RECORD_PROLOGUE_SIZE`] bytes before the fingerprint field. Only the
/// first match is reported. Occurrences closer than that to the start of the
/// buffer cannot belong to a record and are skipped.
pub fn locate(archive: &[u8], fingerprint: &[u8; 4]) -> Option<usize> {
    archive
        .get(RECORD_PROLOGUE_SIZE..)?
        .windows(fingerprint.len())
        .position(|window| window == fingerprint)
}

/// [`locate`] for a parsed [`Fingerprint`]
pub fn locate_fingerprint(archive: &[u8], fingerprint: &Fingerprint) -> Option<usize> {
    let offset = locate(archive, fingerprint.as_bytes());
    match offset {
        Some(offset) => tracing::debug!(
            "fingerprint {} ({}) found for record at {:#x}",
            fingerprint,
            hex::encode(fingerprint.as_bytes()),
            offset
        ),
        None => tracing::debug!(
            "fingerprint {} ({}) not present in {} bytes",
            fingerprint,
            hex::encode(fingerprint.as_bytes()),
            archive.len()
        ),
    }
    offset
}
