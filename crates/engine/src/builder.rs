//! Assembly of the per-directory rule lists for a package.

use filters::defaults::{DEPENDENCY_FOLDER, NEVER_IGNORE, VCS_FOLDER_NAMES};
use filters::{IgnoreFile, PatternError, Rule, ScopeTable, ScopeTableBuilder, default_ignore_patterns};

use crate::manifest::Manifest;

/// Builds the [`ScopeTable`] for one package.
///
/// The root scope is assembled in a fixed order; later rules override
/// earlier ones when both match:
///
/// 1. the `files` allow-list (each entry and everything below it), or, when
///    `files` is absent, `*`, `*/**` followed by the default deny-list;
/// 2. rules from an ignore file at the package root;
/// 3. the never-ignore rules (`package.json`, readme, license and friends);
/// 4. `main`;
/// 5. `node_modules/<name>/**` for each bundled dependency.
///
/// Ignore files in nested directories are inserted at the front of their
/// own directory's scope.
///
/// # Examples
///
/// ```
/// use engine::{FilterSetBuilder, Manifest};
/// use std::path::Path;
///
/// let manifest = Manifest::from_json(r#"{"files": ["lib"]}"#).unwrap();
/// let table = FilterSetBuilder::new(&manifest).build().unwrap();
///
/// assert!(table.allows(Path::new("lib/index.js")));
/// assert!(table.allows(Path::new("package.json")));
/// assert!(!table.allows(Path::new("test/index.js")));
/// ```
#[derive(Debug)]
pub struct FilterSetBuilder<'m> {
    manifest: &'m Manifest,
    ignore_files: Vec<IgnoreFile>,
}

impl<'m> FilterSetBuilder<'m> {
    /// Starts a builder for `manifest`.
    #[must_use]
    pub const fn new(manifest: &'m Manifest) -> Self {
        Self {
            manifest,
            ignore_files: Vec::new(),
        }
    }

    /// Registers a compiled ignore file.
    pub fn ignore_file(&mut self, file: IgnoreFile) -> &mut Self {
        self.ignore_files.push(file);
        self
    }

    /// Directory names that are never traversed for this package.
    ///
    /// Version-control folders are always pruned; `node_modules` is pruned
    /// unless the manifest bundles dependencies.
    #[must_use]
    pub fn pruned_folders(&self) -> Vec<&'static str> {
        let mut names = VCS_FOLDER_NAMES.to_vec();
        if self.manifest.bundled().is_none() {
            names.push(DEPENDENCY_FOLDER);
        }
        names
    }

    /// Returns the root scope's rules in evaluation order.
    #[must_use]
    pub fn root_rules(&self) -> Vec<Rule> {
        let mut rules = Vec::new();

        match self.manifest.allow_list() {
            Some(entries) => {
                let nested: Vec<Rule> = entries
                    .iter()
                    .map(|entry| Rule::include(format!("{entry}/**")))
                    .collect();
                rules.extend(entries.into_iter().map(Rule::include));
                rules.extend(nested);
            }
            None => {
                rules.push(Rule::include("*"));
                rules.push(Rule::include("*/**"));
                rules.extend(default_ignore_patterns().map(Rule::exclude));
            }
        }

        for file in self.ignore_files.iter().filter(|file| is_root(file)) {
            rules.extend(file.rules().iter().cloned());
        }

        rules.extend(NEVER_IGNORE.iter().copied().map(Rule::include));

        if let Some(main) = self.manifest.entry_point() {
            rules.push(Rule::include(main));
        }

        if let Some(bundled) = self.manifest.bundled() {
            rules.extend(
                bundled
                    .into_iter()
                    .map(|name| Rule::include(format!("{DEPENDENCY_FOLDER}/{name}/**"))),
            );
        }

        rules
    }

    /// Compiles every rule into a [`ScopeTable`].
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] when a manifest entry or ignore-file line is
    /// not a valid glob.
    pub fn build(self) -> Result<ScopeTable, PatternError> {
        let mut builder = ScopeTableBuilder::new(self.root_rules());
        for file in self.ignore_files {
            if is_root(&file) {
                continue;
            }
            let anchor = file.anchor().to_path_buf();
            builder.prepend(anchor, file.into_rules());
        }
        builder.build()
    }
}

fn is_root(file: &IgnoreFile) -> bool {
    file.anchor().as_os_str().is_empty() || file.anchor() == std::path::Path::new(".")
}
