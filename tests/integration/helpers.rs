//! Helpers for driving the `packlist` binary against fixture packages.

#![allow(dead_code)]

use std::fs::File;
use std::path::Path;

use assert_cmd::Command;
use flate2::read::GzDecoder;

pub use test_support::{FileTree, TestDir};

/// Command for the built `packlist` binary with logging overrides cleared.
pub fn packlist() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_packlist"));
    command.env_remove("PACKLIST_LOG");
    command
}

/// Runs `packlist --dry-run <root>` and returns the printed paths.
pub fn dry_run(root: &Path) -> Vec<String> {
    let output = packlist().arg("--dry-run").arg(root).output().expect("run packlist");
    assert!(
        output.status.success(),
        "dry run failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout)
        .expect("stdout is UTF-8")
        .lines()
        .map(str::to_owned)
        .collect()
}

/// Lists the entry names of a gzip-compressed tarball.
pub fn tarball_entries(path: &Path) -> Vec<String> {
    let file = File::open(path).expect("open tarball");
    let mut archive = tar::Archive::new(GzDecoder::new(file));
    archive
        .entries()
        .expect("read entries")
        .map(|entry| {
            let entry = entry.expect("read entry");
            entry
                .path()
                .expect("entry path")
                .to_string_lossy()
                .into_owned()
        })
        .collect()
}
