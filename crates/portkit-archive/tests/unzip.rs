use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use portkit_archive::{Unsupported, ZipExtractor, unzip, unzip_with};
use portkit_fs::ErrorCode;
use zip::write::SimpleFileOptions;

fn temp_dir() -> tempfile::TempDir {
    tempfile::Builder::new()
        .prefix("portkit-test-zip-")
        .tempdir()
        .expect("Failed to create temp dir")
}

fn write_zip(path: &Path, entries: &[(&str, Option<&[u8]>)]) {
    let file = File::create(path).expect("Failed to create zip file");
    let mut writer = zip::ZipWriter::new(file);
    let options = SimpleFileOptions::default();
    for (name, content) in entries {
        match content {
            Some(bytes) => {
                writer.start_file(*name, options).unwrap();
                writer.write_all(bytes).unwrap();
            }
            None => writer.add_directory(*name, options).unwrap(),
        }
    }
    writer.finish().unwrap();
}

#[test]
fn extracts_nested_tree_next_to_archive() {
    let dir = temp_dir();
    let archive = dir.path().join("bundle.zip");
    write_zip(&archive, &[
        ("readme.txt", Some(b"hello")),
        ("assets/", None),
        ("assets/icons/", None),
        ("assets/icons/app.svg", Some(b"<svg/>")),
        ("bin/tool", Some(&[0u8, 1, 2, 3])),
    ]);

    let out = unzip(&archive).expect("extraction failed");

    assert!(out.is_absolute());
    assert_eq!(out, std::path::absolute(dir.path().join("bundle")).unwrap());
    assert_eq!(fs::read(out.join("readme.txt")).unwrap(), b"hello");
    assert_eq!(fs::read(out.join("assets/icons/app.svg")).unwrap(), b"<svg/>");
    assert_eq!(fs::read(out.join("bin/tool")).unwrap(), [0u8, 1, 2, 3]);
    assert!(out.join("assets").is_dir());
}

#[test]
fn archive_without_extension_uses_suffix() {
    let dir = temp_dir();
    let archive = dir.path().join("payload");
    write_zip(&archive, &[("a.txt", Some(b"a"))]);

    let out = unzip(&archive).unwrap();

    assert!(out.ends_with("payload_unzipped"));
    assert_eq!(fs::read_to_string(out.join("a.txt")).unwrap(), "a");
}

#[test]
fn extracting_twice_overwrites() {
    let dir = temp_dir();
    let archive = dir.path().join("twice.zip");
    write_zip(&archive, &[("f.txt", Some(b"v1"))]);
    unzip(&archive).unwrap();

    write_zip(&archive, &[("f.txt", Some(b"v2"))]);
    let out = unzip(&archive).unwrap();

    assert_eq!(fs::read_to_string(out.join("f.txt")).unwrap(), "v2");
}

#[test]
fn missing_archive_is_file_not_found() {
    let dir = temp_dir();
    let err = unzip(dir.path().join("nope.zip")).unwrap_err();

    assert_eq!(err.code(), ErrorCode::FileNotFound);
    assert!(err.message().contains("nope.zip"));
}

#[test]
fn corrupt_archive_is_io_error() {
    let dir = temp_dir();
    let archive = dir.path().join("broken.zip");
    fs::write(&archive, b"this is not a zip file at all").unwrap();

    let err = unzip(&archive).unwrap_err();

    assert_eq!(err.code(), ErrorCode::IoError);
    assert!(err.message().starts_with("failed to unzip"));
}

#[test]
fn entry_escaping_output_is_rejected() {
    let dir = temp_dir();
    let archive = dir.path().join("evil.zip");
    write_zip(&archive, &[("../evil.txt", Some(b"pwned"))]);

    let err = unzip(&archive).unwrap_err();

    assert_eq!(err.code(), ErrorCode::IoError);
    assert!(!dir.path().join("evil.txt").exists());
}

#[test]
fn unsupported_extractor_reports_platform() {
    let err = unzip_with(&Unsupported, PathBuf::from("/no/such/archive.zip")).unwrap_err();
    assert_eq!(err.code(), ErrorCode::UnsupportedPlatform);
}

#[test]
fn explicit_zip_extractor() {
    let dir = temp_dir();
    let archive = dir.path().join("explicit.zip");
    write_zip(&archive, &[("x", Some(b"x"))]);

    let out = unzip_with(&ZipExtractor, &archive).unwrap();
    assert!(out.join("x").is_file());
}

#[cfg(unix)]
#[test]
fn preserves_unix_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let dir = temp_dir();
    let archive = dir.path().join("exec.zip");
    let file = File::create(&archive).unwrap();
    let mut writer = zip::ZipWriter::new(file);
    writer
        .start_file("run.sh", SimpleFileOptions::default().unix_permissions(0o755))
        .unwrap();
    writer.write_all(b"#!/bin/sh\n").unwrap();
    writer.finish().unwrap();

    let out = unzip(&archive).unwrap();
    let mode = fs::metadata(out.join("run.sh")).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o755);
}

#[cfg(unix)]
#[test]
fn strips_set_id_bits() {
    use std::os::unix::fs::PermissionsExt;

    let mut bytes = {
        let mut writer = zip::ZipWriter::new(std::io::Cursor::new(Vec::new()));
        writer
            .start_file("suid-tool", SimpleFileOptions::default().unix_permissions(0o755))
            .unwrap();
        writer.write_all(b"#!/bin/sh\n").unwrap();
        writer.finish().unwrap().into_inner()
    };
    // rewrite the central directory record: made by unix, mode 0o104755
    let header = bytes
        .windows(4)
        .position(|w| w == [0x50, 0x4b, 0x01, 0x02])
        .expect("central directory header");
    bytes[header + 5] = 3;
    bytes[header + 38..header + 42].copy_from_slice(&(0o104755u32 << 16).to_le_bytes());

    let dir = temp_dir();
    let archive = dir.path().join("setuid.zip");
    fs::write(&archive, &bytes).unwrap();

    let out = unzip(&archive).unwrap();
    let mode = fs::metadata(out.join("suid-tool")).unwrap().permissions().mode();
    assert_eq!(mode & 0o7000, 0, "set-id bits survived: {mode:o}");
    assert_eq!(mode & 0o777, 0o755);
}

#[cfg(unix)]
#[test]
fn unreadable_archive_is_permission_denied() {
    use std::os::unix::fs::PermissionsExt;

    let dir = temp_dir();
    let archive = dir.path().join("locked.zip");
    write_zip(&archive, &[("a", Some(b"a"))]);
    fs::set_permissions(&archive, fs::Permissions::from_mode(0o000)).unwrap();

    // root ignores file modes
    if File::open(&archive).is_ok() {
        return;
    }

    let err = unzip(&archive).unwrap_err();
    assert_eq!(err.code(), ErrorCode::PermissionDenied);

    fs::set_permissions(&archive, fs::Permissions::from_mode(0o644)).unwrap();
}
