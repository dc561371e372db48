#![allow(clippy::expect_used, clippy::unwrap_used)]
//! End-to-end patch runs against files on disk

use bars_formats::Endianness;
use bars_formats::bwav::BwavRecordBuilder;
use bars_patcher::{FileRole, LogLevel, PatchConfig, PatchError, Patcher};
use pretty_assertions::assert_eq;
use std::path::Path;
use tempfile::TempDir;

const FINGERPRINT: u32 = 0x5EED_CAFE;

struct Fixture {
    dir: TempDir,
    archive: Vec<u8>,
    patch: Vec<u8>,
    record_offset: usize,
}

impl Fixture {
    /// Archive embedding a two-channel original record, plus a patch with
    /// `patch_channels` channels
    fn new(patch_channels: u16) -> Self {
        let dir = TempDir::new().unwrap();

        let original = BwavRecordBuilder::new(2)
            .crc32(FINGERPRINT)
            .build()
            .unwrap();
        let mut original_file = original.clone();
        // Sample data, never part of the header
        original_file.extend_from_slice(&[0x5A; 256]);

        let mut patch = BwavRecordBuilder::new(patch_channels)
            .endianness(Endianness::Little)
            .crc32(0x0123_4567)
            .channel_fill(0x90)
            .build()
            .unwrap();
        patch.extend_from_slice(&[0xA5; 128]);

        // "BARS" preamble, the embedded record, then unrelated trailing data
        let mut archive = b"BARS".to_vec();
        archive.extend((0..92u8).map(|b| b.wrapping_mul(3)));
        let record_offset = archive.len();
        archive.extend_from_slice(&original);
        archive.extend((0..200u8).rev());

        std::fs::write(dir.path().join("in.bars"), &archive).unwrap();
        std::fs::write(dir.path().join("og.bwav"), &original_file).unwrap();
        std::fs::write(dir.path().join("patch.bwav"), &patch).unwrap();

        Self {
            dir,
            archive,
            patch,
            record_offset,
        }
    }

    fn path(&self, name: &str) -> std::path::PathBuf {
        self.dir.path().join(name)
    }

    fn config(&self) -> PatchConfig {
        PatchConfig {
            input: self.path("in.bars"),
            output: self.path("out.bars"),
            original: self.path("og.bwav"),
            patch: self.path("patch.bwav"),
            log_level: LogLevel::Info,
        }
    }
}

fn assert_no_output(path: &Path) {
    assert!(!path.exists(), "{} should not exist", path.display());
}

#[test]
fn test_patch_replaces_only_the_record() {
    let fixture = Fixture::new(2);
    let report = Patcher::new(fixture.config()).run().unwrap();

    let total_length = 0x10 + 0x4C * 2;
    assert_eq!(report.region.offset, fixture.record_offset);
    assert_eq!(report.patch_length, total_length);
    assert_eq!(report.fingerprint.value(), FINGERPRINT);

    let output = std::fs::read(fixture.path("out.bars")).unwrap();
    assert_eq!(output.len(), fixture.archive.len());

    let start = fixture.record_offset;
    let end = start + total_length;
    assert_eq!(&output[..start], &fixture.archive[..start]);
    assert_eq!(&output[start..end], &fixture.patch[..total_length]);
    assert_eq!(&output[end..], &fixture.archive[end..]);
}

#[test]
fn test_output_overwrites_existing_file() {
    let fixture = Fixture::new(2);
    std::fs::write(fixture.path("out.bars"), vec![0xFF; 4096]).unwrap();

    Patcher::new(fixture.config()).run().unwrap();
    let output = std::fs::read(fixture.path("out.bars")).unwrap();
    assert_eq!(output.len(), fixture.archive.len());
}

#[test]
fn test_channel_mismatch_writes_nothing() {
    let fixture = Fixture::new(3);
    let err = Patcher::new(fixture.config()).run().unwrap_err();

    assert!(matches!(
        err,
        PatchError::ChannelMismatch {
            original: 2,
            patch: 3
        }
    ));
    assert_no_output(&fixture.path("out.bars"));
}

#[test]
fn test_missing_fingerprint_writes_nothing() {
    let fixture = Fixture::new(2);
    let unrelated = BwavRecordBuilder::new(2).crc32(0xFFFF_0000).build().unwrap();
    std::fs::write(fixture.path("og.bwav"), unrelated).unwrap();

    let err = Patcher::new(fixture.config()).run().unwrap_err();
    assert!(matches!(err, PatchError::NotFound { .. }));
    assert_no_output(&fixture.path("out.bars"));
}

#[test]
fn test_missing_input_file() {
    let fixture = Fixture::new(2);
    std::fs::remove_file(fixture.path("patch.bwav")).unwrap();

    let err = Patcher::new(fixture.config()).run().unwrap_err();
    assert!(matches!(
        err,
        PatchError::Io {
            role: FileRole::PatchRecord,
            ..
        }
    ));
    assert_no_output(&fixture.path("out.bars"));
}

#[test]
fn test_unwritable_output() {
    let fixture = Fixture::new(2);
    let mut config = fixture.config();
    config.output = fixture.path("missing-dir/out.bars");

    let err = Patcher::new(config).run().unwrap_err();
    assert!(matches!(
        err,
        PatchError::Io {
            role: FileRole::OutputArchive,
            ..
        }
    ));
}
