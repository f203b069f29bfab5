//! Drives a package walk through the scope table into the final selection.

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use filters::{IgnoreFile, IgnorePolicy, PriorityPolicy, ScopeTable};
use walk::WalkBuilder;

use crate::builder::FilterSetBuilder;
use crate::error::SelectError;
use crate::manifest::Manifest;

/// Options controlling a file selection.
#[derive(Clone)]
pub struct SelectOptions {
    policy: Arc<dyn IgnorePolicy>,
    follow_symlinks: bool,
    parallel: bool,
}

impl SelectOptions {
    /// Creates options with the default ignore policy, no symlink following
    /// and parallel evaluation when the `parallel` feature is enabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            policy: Arc::new(PriorityPolicy::default()),
            follow_symlinks: false,
            parallel: cfg!(feature = "parallel"),
        }
    }

    /// Replaces the policy that picks each directory's ignore file.
    #[must_use]
    pub fn policy(mut self, policy: impl IgnorePolicy + 'static) -> Self {
        self.policy = Arc::new(policy);
        self
    }

    /// Descends into symlinked directories.
    #[must_use]
    pub const fn follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    /// Enables or disables parallel evaluation.
    ///
    /// Has no effect when the crate is built without the `parallel` feature.
    #[must_use]
    pub const fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Reports whether candidates will be evaluated in parallel.
    #[must_use]
    pub const fn is_parallel(&self) -> bool {
        self.parallel && cfg!(feature = "parallel")
    }
}

impl Default for SelectOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SelectOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectOptions")
            .field("follow_symlinks", &self.follow_symlinks)
            .field("parallel", &self.parallel)
            .finish_non_exhaustive()
    }
}

/// Sorted, de-duplicated set of selected paths relative to the package root.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionResult {
    paths: BTreeSet<PathBuf>,
}

impl SelectionResult {
    /// Returns `true` if `path` was selected.
    #[must_use]
    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        self.paths.contains(path.as_ref())
    }

    /// Number of selected paths.
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Returns `true` when nothing was selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Iterates the selected paths in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter().map(PathBuf::as_path)
    }

    /// Consumes the result, returning the underlying set.
    #[must_use]
    pub fn into_paths(self) -> BTreeSet<PathBuf> {
        self.paths
    }
}

impl FromIterator<PathBuf> for SelectionResult {
    fn from_iter<I: IntoIterator<Item = PathBuf>>(iter: I) -> Self {
        Self {
            paths: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for SelectionResult {
    type Item = PathBuf;
    type IntoIter = std::collections::btree_set::IntoIter<PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.into_iter()
    }
}

impl<'a> IntoIterator for &'a SelectionResult {
    type Item = &'a PathBuf;
    type IntoIter = std::collections::btree_set::Iter<'a, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}

/// Loads the manifest at `root` and selects the package's files.
///
/// # Errors
///
/// Fails when the manifest cannot be loaded or for any reason listed on
/// [`select_files`].
pub fn select_package(root: &Path, options: &SelectOptions) -> Result<SelectionResult, SelectError> {
    let manifest = Manifest::load(root)?;
    select_files(root, &manifest, options)
}

/// Selects the files of the package at `root` that would be published.
///
/// The tree is walked once with version-control folders (and `node_modules`
/// unless dependencies are bundled) pruned. Every directory's governing
/// ignore file is read and compiled, the scope table is built, and each
/// non-directory entry is evaluated against it.
///
/// # Errors
///
/// Returns [`SelectError::Walk`] when the tree cannot be traversed,
/// [`SelectError::ReadIgnoreFile`] when a governing ignore file cannot be
/// read and [`SelectError::Pattern`] when a rule is not a valid glob.
///
/// # Examples
///
/// ```
/// use engine::{Manifest, SelectOptions, select_files};
/// use std::fs;
///
/// # fn demo() -> Result<(), Box<dyn std::error::Error>> {
/// let temp = tempfile::tempdir()?;
/// fs::write(temp.path().join("package.json"), r#"{"name":"x","version":"1.0.0"}"#)?;
/// fs::write(temp.path().join("index.js"), "")?;
/// fs::create_dir(temp.path().join("test"))?;
/// fs::write(temp.path().join("test/index.js"), "")?;
/// fs::write(temp.path().join(".gitignore"), "test/\n")?;
///
/// let manifest = Manifest::load(temp.path())?;
/// let selection = select_files(temp.path(), &manifest, &SelectOptions::default())?;
/// let paths: Vec<_> = selection.iter().collect();
/// assert_eq!(paths, [std::path::Path::new("index.js"), std::path::Path::new("package.json")]);
/// # Ok(())
/// # }
/// # demo().unwrap();
/// ```
pub fn select_files(
    root: &Path,
    manifest: &Manifest,
    options: &SelectOptions,
) -> Result<SelectionResult, SelectError> {
    let mut builder = FilterSetBuilder::new(manifest);
    let walker = WalkBuilder::new(root)
        .include_root(false)
        .follow_symlinks(options.follow_symlinks)
        .prune_names(builder.pruned_folders())
        .build()?;

    let mut candidates = Vec::new();
    let mut ignore_names: BTreeMap<PathBuf, Vec<String>> = BTreeMap::new();
    for entry in walker {
        let entry = entry?;
        if entry.is_dir() {
            continue;
        }
        let relative = entry.into_relative_path();
        if let Some(name) = relative.file_name().and_then(|name| name.to_str()) {
            if options.policy.is_candidate(name) {
                let dir = relative.parent().unwrap_or_else(|| Path::new("")).to_path_buf();
                ignore_names.entry(dir).or_default().push(name.to_owned());
            }
        }
        candidates.push(relative);
    }
    logging::trace_select!(
        "walked {} candidates under {}",
        candidates.len(),
        root.display()
    );

    for (dir, names) in &ignore_names {
        let names: Vec<&str> = names.iter().map(String::as_str).collect();
        let Some(chosen) = options.policy.select(&names) else {
            continue;
        };
        let relative = dir.join(chosen);
        let path = root.join(&relative);
        let bytes = fs::read(&path).map_err(|error| SelectError::read_ignore_file(&path, error))?;
        let file = IgnoreFile::compile(&String::from_utf8_lossy(&bytes), dir.clone());
        logging::trace_select!(
            "{} governs '{}' with {} rules",
            relative.display(),
            dir.display(),
            file.rules().len()
        );
        builder.ignore_file(file);
    }

    let table = builder.build()?;
    let selection = evaluate(&table, candidates, options.is_parallel());
    logging::trace_select!("selected {} files", selection.len());
    Ok(selection)
}

#[cfg(feature = "parallel")]
fn evaluate(table: &ScopeTable, candidates: Vec<PathBuf>, parallel: bool) -> SelectionResult {
    use rayon::prelude::*;

    if parallel {
        let paths: BTreeSet<PathBuf> = candidates
            .into_par_iter()
            .filter(|path| table.allows(path))
            .collect();
        SelectionResult { paths }
    } else {
        evaluate_sequential(table, candidates)
    }
}

#[cfg(not(feature = "parallel"))]
fn evaluate(table: &ScopeTable, candidates: Vec<PathBuf>, _parallel: bool) -> SelectionResult {
    evaluate_sequential(table, candidates)
}

fn evaluate_sequential(table: &ScopeTable, candidates: Vec<PathBuf>) -> SelectionResult {
    candidates
        .into_iter()
        .filter(|path| table.allows(path))
        .collect()
}
