//! Reads written tarballs back and checks their entries.

use std::io::Read;

use archive::{REGULAR_MODE, create_tarball, tarball_file_name, write_tarball};
use engine::{SelectOptions, SelectionResult, select_package};
use flate2::read::GzDecoder;
use test_support::{FileTree, TestDir};

struct Entry {
    name: String,
    mode: u32,
    uid: u64,
    mtime: u64,
    contents: String,
}

fn read_entries(bytes: &[u8]) -> Vec<Entry> {
    let mut archive = tar::Archive::new(GzDecoder::new(bytes));
    archive
        .entries()
        .unwrap()
        .map(|entry| {
            let mut entry = entry.unwrap();
            let header = entry.header().clone();
            let mut contents = String::new();
            entry.read_to_string(&mut contents).unwrap();
            Entry {
                name: entry.path().unwrap().to_string_lossy().into_owned(),
                mode: header.mode().unwrap(),
                uid: header.uid().unwrap(),
                mtime: header.mtime().unwrap(),
                contents,
            }
        })
        .collect()
}

fn fixture() -> TestDir {
    let dir = TestDir::new().unwrap();
    FileTree::new()
        .manifest(r#"{"name":"@acme/demo","version":"1.2.3"}"#)
        .text_file("index.js", "module.exports = 42;\n")
        .text_file("lib/util.js", "exports.id = (x) => x;\n")
        .text_file("test/index.js", "assert(true);\n")
        .text_file(".npmignore", "test\n")
        .create_in(&dir)
        .unwrap();
    dir
}

#[test]
fn selected_files_land_under_package_prefix() {
    let dir = fixture();
    let selection = select_package(dir.path(), &SelectOptions::default()).unwrap();
    let (bytes, summary) = write_tarball(dir.path(), &selection, Vec::new()).unwrap();

    let entries = read_entries(&bytes);
    let names: Vec<_> = entries.iter().map(|entry| entry.name.as_str()).collect();
    assert_eq!(
        names,
        ["package/index.js", "package/lib/util.js", "package/package.json"]
    );
    assert_eq!(summary.entries, 3);
    assert_eq!(summary.skipped, 0);
    assert_eq!(entries[0].contents, "module.exports = 42;\n");
}

#[test]
fn headers_are_normalised() {
    let dir = fixture();
    let selection = select_package(dir.path(), &SelectOptions::default()).unwrap();
    let (bytes, _) = write_tarball(dir.path(), &selection, Vec::new()).unwrap();

    for entry in read_entries(&bytes) {
        assert_eq!(entry.uid, 0, "{}", entry.name);
        assert_eq!(entry.mtime, 0, "{}", entry.name);
        assert_eq!(entry.mode, REGULAR_MODE, "{}", entry.name);
    }
}

#[test]
fn repeated_runs_are_byte_identical() {
    let dir = fixture();
    let selection = select_package(dir.path(), &SelectOptions::default()).unwrap();
    let (first, _) = write_tarball(dir.path(), &selection, Vec::new()).unwrap();
    let (second, _) = write_tarball(dir.path(), &selection, Vec::new()).unwrap();
    assert_eq!(first, second);
}

#[cfg(unix)]
#[test]
fn executable_bit_maps_to_755() {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    let dir = TestDir::new().unwrap();
    let script = dir.write_file("bin/cli.js", b"#!/usr/bin/env node\n").unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o700)).unwrap();

    let selection: SelectionResult = ["bin/cli.js"].into_iter().map(Into::into).collect();
    let (bytes, _) = write_tarball(dir.path(), &selection, Vec::new()).unwrap();
    assert_eq!(read_entries(&bytes)[0].mode, archive::EXECUTABLE_MODE);
}

#[test]
fn long_paths_are_preserved() {
    let dir = TestDir::new().unwrap();
    let relative = format!("{}/{}.js", "nested".repeat(12), "x".repeat(60));
    dir.write_file(&relative, b"").unwrap();

    let selection: SelectionResult = [relative.clone()].into_iter().map(Into::into).collect();
    let (bytes, _) = write_tarball(dir.path(), &selection, Vec::new()).unwrap();
    assert_eq!(read_entries(&bytes)[0].name, format!("package/{relative}"));
}

#[test]
fn missing_selected_file_is_a_read_error() {
    let dir = TestDir::new().unwrap();
    let selection: SelectionResult = ["gone.js"].into_iter().map(Into::into).collect();
    let error = write_tarball(dir.path(), &selection, Vec::new()).unwrap_err();
    assert!(matches!(error, archive::ArchiveError::Read { .. }));
}

#[test]
fn create_tarball_writes_named_file() {
    let dir = fixture();
    let selection = select_package(dir.path(), &SelectOptions::default()).unwrap();
    let destination = dir.join(tarball_file_name("@acme/demo", "1.2.3"));

    let summary = create_tarball(dir.path(), &selection, &destination).unwrap();
    assert_eq!(summary.entries, 3);
    assert!(dir.exists("acme-demo-v1.2.3.tgz"));
    assert_eq!(read_entries(&std::fs::read(destination).unwrap()).len(), 3);
}

#[test]
fn repacking_inside_the_tree_skips_the_previous_archive() {
    let dir = fixture();
    let destination = dir.join(tarball_file_name("@acme/demo", "1.2.3"));
    let first = select_package(dir.path(), &SelectOptions::default()).unwrap();
    create_tarball(dir.path(), &first, &destination).unwrap();
    let first_bytes = std::fs::read(&destination).unwrap();

    let second = select_package(dir.path(), &SelectOptions::default()).unwrap();
    assert!(second.contains("acme-demo-v1.2.3.tgz"));
    let summary = create_tarball(dir.path(), &second, &destination).unwrap();

    assert_eq!(summary.entries, 3);
    let bytes = std::fs::read(&destination).unwrap();
    let names: Vec<_> = read_entries(&bytes).into_iter().map(|entry| entry.name).collect();
    assert_eq!(
        names,
        ["package/index.js", "package/lib/util.js", "package/package.json"]
    );
    assert_eq!(bytes, first_bytes);
}

#[test]
fn no_staging_file_is_left_behind() {
    let dir = fixture();
    let selection = select_package(dir.path(), &SelectOptions::default()).unwrap();
    create_tarball(dir.path(), &selection, &dir.join("out.tgz")).unwrap();

    let leftovers: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name.starts_with(".packlist-"))
        .collect();
    assert!(leftovers.is_empty(), "{leftovers:?}");
}

#[test]
fn failed_pack_keeps_the_existing_archive() {
    let dir = fixture();
    let destination = dir.join("keep.tgz");
    std::fs::write(&destination, b"previous").unwrap();

    let selection: SelectionResult = ["gone.js"].into_iter().map(Into::into).collect();
    let error = create_tarball(dir.path(), &selection, &destination).unwrap_err();
    assert!(matches!(error, archive::ArchiveError::Read { .. }));
    assert_eq!(std::fs::read(&destination).unwrap(), b"previous");
}

#[cfg(unix)]
#[test]
fn written_archive_is_world_readable() {
    use std::os::unix::fs::PermissionsExt;

    let dir = fixture();
    let selection = select_package(dir.path(), &SelectOptions::default()).unwrap();
    let destination = dir.join("out.tgz");
    create_tarball(dir.path(), &selection, &destination).unwrap();

    let mode = std::fs::metadata(&destination).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, REGULAR_MODE);
}
