//! In-place record overwrite

use super::PatchRegion;
use crate::error::CapacityError;

/// Overwrite `archive[offset..offset + patch.len()]` with `patch`
///
/// The archive is never resized. When the record does not fit between
/// `offset` and the end of the archive, nothing is written.
pub fn apply(
    archive: &mut [u8],
    offset: usize,
    patch: &[u8],
) -> Result<PatchRegion, CapacityError> {
    let available = archive.len().saturating_sub(offset);
    let target = offset
        .checked_add(patch.len())
        .filter(|_| offset <= archive.len())
        .and_then(|end| archive.get_mut(offset..end))
        .ok_or(CapacityError {
            offset,
            needed: patch.len(),
            available,
        })?;

    target.copy_from_slice(patch);
    Ok(PatchRegion {
        offset,
        length: patch.len(),
    })
}
