use super::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Creates every path in `layout`; names ending in `/` become directories.
fn tree(layout: &[&str]) -> TempDir {
    let temp = tempfile::tempdir().expect("tempdir");
    for item in layout {
        let path = temp.path().join(item.trim_end_matches('/'));
        if item.ends_with('/') {
            fs::create_dir_all(&path).expect("create dir");
        } else {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).expect("create parent");
            }
            fs::write(&path, b"").expect("write file");
        }
    }
    temp
}

fn walk(builder: WalkBuilder) -> Vec<String> {
    builder
        .include_root(false)
        .build()
        .expect("walker")
        .map(|entry| {
            let entry = entry.expect("entry");
            entry.relative_path().to_string_lossy().replace('\\', "/")
        })
        .collect()
}

// ============================================================================
// Ordering and shape
// ============================================================================

#[test]
fn subtree_finishes_before_next_sibling() {
    let temp = tree(&["b.js", "a/z.js", "a/m/n.js", "c/", "A.md"]);
    assert_eq!(
        walk(WalkBuilder::new(temp.path())),
        ["A.md", "a", "a/m", "a/m/n.js", "a/z.js", "b.js", "c"]
    );
}

#[test]
fn root_comes_first_unless_skipped() {
    let temp = tree(&["index.js"]);
    let mut walker = WalkBuilder::new(temp.path()).build().expect("walker");

    let root = walker.next().expect("root").expect("root ok");
    assert!(root.is_root());
    assert_eq!(root.depth(), 0);
    assert_eq!(root.relative_path(), Path::new(""));
    assert!(root.file_name().is_none());

    let child = walker.next().expect("child").expect("child ok");
    assert!(!child.is_root());
    assert_eq!(child.relative_path(), Path::new("index.js"));
    assert!(walker.next().is_none());
}

#[test]
fn file_root_yields_only_itself() {
    let temp = tree(&["package.json"]);
    let file = temp.path().join("package.json");

    let entries: Vec<_> = WalkBuilder::new(&file)
        .build()
        .expect("walker")
        .collect::<Result<_, _>>()
        .expect("entries");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].full_path(), file);
    assert!(!entries[0].is_dir());
}

#[test]
fn depth_counts_relative_components() {
    let temp = tree(&["lib/deep/er/x.js", "top.js"]);
    for entry in WalkBuilder::new(temp.path()).include_root(false).build().expect("walker") {
        let entry = entry.expect("entry");
        assert_eq!(entry.depth(), entry.relative_path().components().count());
        assert_eq!(entry.is_dir(), entry.metadata().is_dir());
        assert!(entry.full_path().ends_with(entry.relative_path()));
    }
}

#[test]
fn relative_root_is_made_absolute() {
    let walker = WalkBuilder::new(".").build().expect("walker");
    let root = walker.take(1).next().expect("root").expect("root ok");
    assert!(root.full_path().is_absolute());
}

// ============================================================================
// Pruning
// ============================================================================

#[test]
fn pruned_names_skip_whole_directories() {
    let temp = tree(&[".git/HEAD", "node_modules/dep/index.js", "lib/index.js"]);
    assert_eq!(
        walk(WalkBuilder::new(temp.path()).prune_names([".git", "node_modules"])),
        ["lib", "lib/index.js"]
    );
}

#[test]
fn pruning_matches_nested_directories() {
    let temp = tree(&["src/.svn/entries", "src/main.js"]);
    assert_eq!(
        walk(WalkBuilder::new(temp.path()).prune_names([".svn"])),
        ["src", "src/main.js"]
    );
}

#[test]
fn regular_file_sharing_a_pruned_name_survives() {
    let temp = tree(&["CVS", "lib/CVS/Root"]);
    assert_eq!(
        walk(WalkBuilder::new(temp.path()).prune_names(["CVS"])),
        ["CVS", "lib"]
    );
}

// ============================================================================
// Symlinks
// ============================================================================

#[cfg(unix)]
mod links {
    use super::*;
    use std::os::unix::fs::symlink;

    fn linked_package() -> TempDir {
        let temp = tree(&["pkg/index.js", "shared/util.js"]);
        symlink(temp.path().join("shared"), temp.path().join("pkg/shared")).expect("symlink");
        temp
    }

    #[test]
    fn links_are_reported_but_not_entered_by_default() {
        let temp = linked_package();
        let root = temp.path().join("pkg");
        assert_eq!(walk(WalkBuilder::new(&root)), ["index.js", "shared"]);

        let link = WalkBuilder::new(&root)
            .include_root(false)
            .build()
            .expect("walker")
            .filter_map(Result::ok)
            .find(|entry| entry.file_name() == Some(std::ffi::OsStr::new("shared")))
            .expect("link entry");
        assert!(!link.is_dir());
        assert!(link.metadata().file_type().is_symlink());
    }

    #[test]
    fn followed_links_keep_the_link_prefix() {
        let temp = linked_package();
        assert_eq!(
            walk(WalkBuilder::new(temp.path().join("pkg")).follow_symlinks(true)),
            ["index.js", "shared", "shared/util.js"]
        );
    }

    #[test]
    fn linked_directory_with_pruned_name_is_skipped() {
        let temp = tree(&["pkg/index.js", "store/dep.js"]);
        symlink(temp.path().join("store"), temp.path().join("pkg/node_modules")).expect("symlink");
        assert_eq!(
            walk(WalkBuilder::new(temp.path().join("pkg")).prune_names(["node_modules"])),
            ["index.js"]
        );
    }

    #[test]
    fn self_referencing_link_terminates() {
        let temp = tree(&["pkg/a.js"]);
        let root = temp.path().join("pkg");
        symlink(&root, root.join("loop")).expect("symlink");
        assert_eq!(
            walk(WalkBuilder::new(&root).follow_symlinks(true)),
            ["a.js", "loop"]
        );
    }

    #[test]
    fn dangling_link_is_yielded_when_following() {
        let temp = tree(&["pkg/a.js"]);
        let root = temp.path().join("pkg");
        symlink(temp.path().join("gone"), root.join("broken")).expect("symlink");
        assert_eq!(
            walk(WalkBuilder::new(&root).follow_symlinks(true)),
            ["a.js", "broken"]
        );
    }
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn missing_root_is_a_root_error() {
    let temp = tempfile::tempdir().expect("tempdir");
    let missing = temp.path().join("absent");
    let error = WalkBuilder::new(&missing).build().expect_err("missing root");
    assert_eq!(error.kind(), WalkErrorKind::Root);
    assert_eq!(error.path(), missing);
}

#[cfg(unix)]
#[test]
fn unlistable_directory_stops_the_walk() {
    use std::os::unix::fs::PermissionsExt;

    let temp = tree(&["a.js", "locked/secret.js", "z.js"]);
    let locked = temp.path().join("locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).expect("chmod");
    let listable_anyway = fs::read_dir(&locked).is_ok();

    if !listable_anyway {
        let mut walker = WalkBuilder::new(temp.path())
            .include_root(false)
            .build()
            .expect("walker");
        assert_eq!(
            walker.next().expect("a.js").expect("a.js ok").relative_path(),
            Path::new("a.js")
        );
        let error = walker.next().expect("error").expect_err("locked dir");
        assert_eq!(error.kind(), WalkErrorKind::ListDirectory);
        assert_eq!(error.path(), PathBuf::from(&locked));
        assert!(walker.next().is_none());
    }

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).expect("restore");
}
