#![deny(unsafe_code)]
#![deny(missing_docs)]

//! Package-tree fixtures shared by the workspace's tests.
//!
//! [`TestDir`] owns a temporary directory that is removed on drop and
//! [`FileTree`] describes a set of files to materialise inside it.
//!
//! ```
//! use test_support::{FileTree, TestDir};
//!
//! let dir = TestDir::new().unwrap();
//! FileTree::new()
//!     .manifest(r#"{"name":"demo","version":"1.0.0"}"#)
//!     .text_file("lib/index.js", "module.exports = 1;")
//!     .create_in(&dir)
//!     .unwrap();
//!
//! assert!(dir.exists("package.json"));
//! assert!(dir.exists("lib/index.js"));
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Temporary directory removed when dropped.
#[derive(Debug)]
pub struct TestDir {
    temp: TempDir,
}

impl TestDir {
    /// Creates a fresh temporary directory.
    ///
    /// # Errors
    ///
    /// Propagates the failure to create the directory.
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            temp: tempfile::tempdir()?,
        })
    }

    /// Absolute path of the directory.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// Joins `relative` onto the directory path.
    #[must_use]
    pub fn join(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.path().join(relative)
    }

    /// Creates `relative` and its parents, returning the absolute path.
    ///
    /// # Errors
    ///
    /// Propagates filesystem errors.
    pub fn mkdir(&self, relative: impl AsRef<Path>) -> io::Result<PathBuf> {
        let path = self.join(relative);
        fs::create_dir_all(&path)?;
        Ok(path)
    }

    /// Writes `contents` to `relative`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Propagates filesystem errors.
    pub fn write_file(&self, relative: impl AsRef<Path>, contents: &[u8]) -> io::Result<PathBuf> {
        let path = self.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, contents)?;
        Ok(path)
    }

    /// Reads the bytes stored at `relative`.
    ///
    /// # Errors
    ///
    /// Propagates filesystem errors.
    pub fn read_file(&self, relative: impl AsRef<Path>) -> io::Result<Vec<u8>> {
        fs::read(self.join(relative))
    }

    /// Reports whether `relative` exists.
    #[must_use]
    pub fn exists(&self, relative: impl AsRef<Path>) -> bool {
        self.join(relative).exists()
    }
}

#[derive(Clone, Debug)]
enum Node {
    File(PathBuf, Vec<u8>),
    Dir(PathBuf),
}

/// Declarative description of files and directories to create.
#[derive(Clone, Debug, Default)]
pub struct FileTree {
    nodes: Vec<Node>,
}

impl FileTree {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file with binary contents.
    pub fn file(&mut self, relative: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) -> &mut Self {
        self.nodes.push(Node::File(relative.into(), contents.into()));
        self
    }

    /// Adds a file with text contents.
    pub fn text_file(&mut self, relative: impl Into<PathBuf>, contents: &str) -> &mut Self {
        self.file(relative, contents.as_bytes())
    }

    /// Adds an empty file.
    pub fn empty_file(&mut self, relative: impl Into<PathBuf>) -> &mut Self {
        self.file(relative, Vec::new())
    }

    /// Adds a `package.json` at the root with the given JSON text.
    pub fn manifest(&mut self, json: &str) -> &mut Self {
        self.text_file("package.json", json)
    }

    /// Adds a directory, which may stay empty.
    pub fn dir(&mut self, relative: impl Into<PathBuf>) -> &mut Self {
        self.nodes.push(Node::Dir(relative.into()));
        self
    }

    /// Materialises the tree inside `dir`.
    ///
    /// # Errors
    ///
    /// Propagates the first filesystem error.
    pub fn create_in(&self, dir: &TestDir) -> io::Result<()> {
        for node in &self.nodes {
            match node {
                Node::File(relative, contents) => {
                    dir.write_file(relative, contents)?;
                }
                Node::Dir(relative) => {
                    dir.mkdir(relative)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dir_is_removed_on_drop() {
        let path = {
            let dir = TestDir::new().expect("create test dir");
            dir.path().to_path_buf()
        };
        assert!(!path.exists());
    }

    #[test]
    fn file_tree_creates_nested_files_and_dirs() {
        let dir = TestDir::new().expect("create test dir");
        FileTree::new()
            .text_file("a.txt", "content a")
            .empty_file("deep/nested/b.txt")
            .dir("empty")
            .create_in(&dir)
            .expect("create tree");

        assert_eq!(dir.read_file("a.txt").unwrap(), b"content a");
        assert!(dir.read_file("deep/nested/b.txt").unwrap().is_empty());
        assert!(dir.join("empty").is_dir());
    }
}
