#![allow(clippy::expect_used, clippy::unwrap_used)]
//! Integration tests for the bars-patcher CLI

use assert_cmd::Command;
use bars_formats::bwav::BwavRecordBuilder;
use predicates::prelude::*;
use tempfile::TempDir;

fn write_fixture(dir: &TempDir, patch_channels: u16) {
    let original = BwavRecordBuilder::new(1).crc32(0xABCD_1234).build().unwrap();
    let patch = BwavRecordBuilder::new(patch_channels)
        .channel_fill(0x33)
        .build()
        .unwrap();

    let mut archive = vec![0u8; 48];
    archive.extend_from_slice(&original);
    archive.extend_from_slice(&[0u8; 16]);

    std::fs::write(dir.path().join("in.bars"), archive).unwrap();
    std::fs::write(dir.path().join("og.bwav"), original).unwrap();
    std::fs::write(dir.path().join("patch.bwav"), patch).unwrap();
}

fn patch_command(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("bars-patcher").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env_remove("BARS_PATCHER_LOG_LEVEL")
        .args([
            "-i",
            "in.bars",
            "-o",
            "out.bars",
            "-og",
            "og.bwav",
            "-patch",
            "patch.bwav",
        ]);
    cmd
}

#[test]
fn test_no_arguments_prints_usage() {
    let mut cmd = Command::cargo_bin("bars-patcher").unwrap();
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_help_command() {
    let mut cmd = Command::cargo_bin("bars-patcher").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Input BARS file"))
        .stdout(predicate::str::contains("--og"))
        .stdout(predicate::str::contains("--patch"));
}

#[test]
fn test_unknown_option() {
    let mut cmd = Command::cargo_bin("bars-patcher").unwrap();
    cmd.args(["-x", "foo"]).assert().code(255);
}

#[test]
fn test_missing_option_argument() {
    let mut cmd = Command::cargo_bin("bars-patcher").unwrap();
    cmd.args(["-i", "in.bars", "-o"]).assert().code(255);
}

#[test]
fn test_missing_required_option() {
    let mut cmd = Command::cargo_bin("bars-patcher").unwrap();
    cmd.args(["-i", "in.bars", "-o", "out.bars", "-og", "og.bwav"])
        .assert()
        .code(255);
}

#[test]
fn test_successful_patch() {
    let dir = TempDir::new().unwrap();
    write_fixture(&dir, 1);

    patch_command(&dir)
        .assert()
        .success()
        .stderr(predicate::str::contains("Channel count: 1 Patch length: 92"))
        .stderr(predicate::str::contains("File found at offset 0x30"))
        .stderr(predicate::str::contains("Done"));

    let output = std::fs::read(dir.path().join("out.bars")).unwrap();
    let patch = std::fs::read(dir.path().join("patch.bwav")).unwrap();
    assert_eq!(&output[48..48 + 92], patch.as_slice());
}

#[test]
fn test_channel_mismatch_exit_code() {
    let dir = TempDir::new().unwrap();
    write_fixture(&dir, 2);

    patch_command(&dir)
        .assert()
        .code(255)
        .stderr(predicate::str::contains("channel counts don't match"));
    assert!(!dir.path().join("out.bars").exists());
}

#[test]
fn test_missing_input_exit_code() {
    let dir = TempDir::new().unwrap();

    patch_command(&dir)
        .assert()
        .code(255)
        .stderr(predicate::str::contains("input BARS file"));
}

#[test]
fn test_failure_message_ignores_log_filter() {
    let dir = TempDir::new().unwrap();
    write_fixture(&dir, 2);

    patch_command(&dir)
        .env("RUST_LOG", "off")
        .assert()
        .code(255)
        .stderr(predicate::str::contains("channel counts don't match"));
}
