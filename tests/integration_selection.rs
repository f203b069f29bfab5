//! End-to-end selection and packing through the `packlist` binary.

mod integration;

use integration::helpers::*;
use predicates::prelude::*;

// ============================================================================
// Selection
// ============================================================================

#[test]
fn fresh_package_ignores_test_directory() {
    let dir = TestDir::new().expect("create test dir");
    FileTree::new()
        .manifest(r#"{"name":"x","version":"1.0.0"}"#)
        .empty_file("index.js")
        .empty_file("test/index.js")
        .text_file(".gitignore", "test/\n")
        .create_in(&dir)
        .expect("create tree");

    assert_eq!(dry_run(dir.path()), ["index.js", "package.json"]);
}

#[test]
fn nested_ignore_files_and_allow_list_combine() {
    let dir = TestDir::new().expect("create test dir");
    FileTree::new()
        .manifest(r#"{"name":"x","version":"1.0.0","files":["lib","docs"],"main":"bin/run.js"}"#)
        .empty_file("bin/run.js")
        .empty_file("bin/other.js")
        .empty_file("docs/public.md")
        .empty_file("docs/secret.md")
        .text_file("docs/.npmignore", "secret.md\n")
        .empty_file("lib/index.js")
        .empty_file("LICENSE")
        .empty_file(".git/config")
        .create_in(&dir)
        .expect("create tree");

    assert_eq!(
        dry_run(dir.path()),
        [
            "LICENSE",
            "bin/run.js",
            "docs/.npmignore",
            "docs/public.md",
            "lib/index.js",
            "package.json",
        ]
    );
}

#[test]
fn bundled_dependency_is_selected() {
    let dir = TestDir::new().expect("create test dir");
    FileTree::new()
        .manifest(r#"{"name":"x","version":"1.0.0","files":["index.js"],"bundleDependencies":["dep"]}"#)
        .empty_file("index.js")
        .empty_file("node_modules/dep/index.js")
        .empty_file("node_modules/other/index.js")
        .create_in(&dir)
        .expect("create tree");

    assert_eq!(
        dry_run(dir.path()),
        ["index.js", "node_modules/dep/index.js", "package.json"]
    );
}

// ============================================================================
// Packing
// ============================================================================

#[test]
fn pack_writes_tarball_matching_dry_run() {
    let dir = TestDir::new().expect("create test dir");
    FileTree::new()
        .manifest(r#"{"name":"@scope/demo","version":"2.1.0"}"#)
        .text_file("index.js", "module.exports = 1;\n")
        .text_file("lib/util.js", "exports.x = 1;\n")
        .empty_file(".DS_Store")
        .create_in(&dir)
        .expect("create tree");

    let listed = dry_run(dir.path());

    packlist()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("scope-demo-v2.1.0.tgz"));

    let entries = tarball_entries(&dir.join("scope-demo-v2.1.0.tgz"));
    let expected: Vec<String> = listed.iter().map(|path| format!("package/{path}")).collect();
    assert_eq!(entries, expected);
}

#[test]
fn pack_without_version_fails() {
    let dir = TestDir::new().expect("create test dir");
    FileTree::new()
        .manifest(r#"{"name":"x"}"#)
        .empty_file("index.js")
        .create_in(&dir)
        .expect("create tree");

    packlist()
        .arg(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("\"version\""));
    assert!(!dir.exists("x-v.tgz"));
}

#[test]
fn custom_filename_is_honoured() {
    let dir = TestDir::new().expect("create test dir");
    FileTree::new()
        .manifest(r#"{"name":"x","version":"1.0.0"}"#)
        .empty_file("index.js")
        .create_in(&dir)
        .expect("create tree");
    let out = TestDir::new().expect("create output dir");
    let destination = out.join("release.tgz");

    packlist()
        .arg("--filename")
        .arg(&destination)
        .arg(dir.path())
        .assert()
        .success();

    assert_eq!(
        tarball_entries(&destination),
        ["package/index.js", "package/package.json"]
    );
}

#[test]
fn repeated_pack_reads_back_cleanly() {
    let dir = TestDir::new().expect("create test dir");
    FileTree::new()
        .manifest(r#"{"name":"demo","version":"1.0.0"}"#)
        .text_file("index.js", "module.exports = 1;\n")
        .create_in(&dir)
        .expect("create tree");

    packlist().arg(dir.path()).assert().success();
    assert_eq!(
        dry_run(dir.path()),
        ["demo-v1.0.0.tgz", "index.js", "package.json"]
    );

    packlist()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("(2 files,"));
    assert_eq!(
        tarball_entries(&dir.join("demo-v1.0.0.tgz")),
        ["package/index.js", "package/package.json"]
    );
}

#[test]
fn copy_to_matches_dry_run() {
    let dir = TestDir::new().expect("create test dir");
    FileTree::new()
        .manifest(r#"{"name":"demo","version":"1.0.0","files":["lib"]}"#)
        .text_file("lib/index.js", "module.exports = 1;\n")
        .text_file("lib/extra/more.js", "exports.more = 1;\n")
        .empty_file("scripts/build.sh")
        .create_in(&dir)
        .expect("create tree");
    let out = TestDir::new().expect("create output dir");

    packlist()
        .arg("--copy-to")
        .arg(out.path())
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("copied 3 files"));

    for listed in dry_run(dir.path()) {
        assert!(out.exists(&listed), "{listed} missing from copy");
    }
    assert!(!out.exists("scripts"));
}

#[test]
fn copy_to_conflicts_with_dry_run() {
    packlist()
        .args(["--copy-to", "out", "--dry-run"])
        .assert()
        .code(2)
        .stderr(predicate::str::starts_with("packlist error:"));
}
