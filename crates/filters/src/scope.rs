use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::{PatternError, Rule, compiled::CompiledRule};

/// Compiled rule list governing one directory.
///
/// Rules are matched against paths relative to [`dir`](Self::dir). The root
/// scope has an empty directory.
#[derive(Clone, Debug)]
pub struct FilterScope {
    pub(crate) dir: PathBuf,
    pub(crate) rules: Vec<CompiledRule>,
}

impl FilterScope {
    /// Returns the directory this scope governs, relative to the package root.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Iterates the scope's rules in evaluation order.
    pub fn rules(&self) -> impl ExactSizeIterator<Item = &Rule> {
        self.rules.iter().map(|compiled| &compiled.rule)
    }

    /// Reports whether this is the package root scope.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.dir.as_os_str().is_empty()
    }

    /// Directory whose nearest scope receives deferred evaluations.
    pub(crate) fn parent_dir(&self) -> Option<&Path> {
        if self.is_root() {
            None
        } else {
            self.dir.parent()
        }
    }
}

#[derive(Debug)]
pub(crate) struct ScopeTableInner {
    pub(crate) root: FilterScope,
    pub(crate) scopes: FxHashMap<PathBuf, FilterScope>,
}

/// Immutable mapping from directory to [`FilterScope`].
///
/// The root scope is always present and is the terminal fallback for every
/// lookup. `ScopeTable` is cheaply cloneable (the inner state is behind an
/// [`Arc`]) and safe to share between evaluation threads.
///
/// # Examples
///
/// ```
/// use filters::{Rule, ScopeTableBuilder};
/// use std::path::Path;
///
/// let mut builder = ScopeTableBuilder::new([Rule::include("*"), Rule::include("*/**")]);
/// builder.prepend("docs", [Rule::exclude("secret.md")]);
/// let table = builder.build().unwrap();
///
/// assert_eq!(table.resolve(Path::new("docs/guide/intro.md")).dir(), Path::new("docs"));
/// assert!(table.resolve(Path::new("index.js")).is_root());
/// ```
#[derive(Clone, Debug)]
pub struct ScopeTable {
    pub(crate) inner: Arc<ScopeTableInner>,
}

impl ScopeTable {
    /// Returns the root scope.
    #[must_use]
    pub fn root(&self) -> &FilterScope {
        &self.inner.root
    }

    /// Returns the scope registered for exactly `dir`, if any.
    #[must_use]
    pub fn get(&self, dir: &Path) -> Option<&FilterScope> {
        let dir = normalize_dir(dir);
        if dir.as_os_str().is_empty() {
            Some(&self.inner.root)
        } else {
            self.inner.scopes.get(&dir)
        }
    }

    /// Number of scopes including the root.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.scopes.len() + 1
    }

    /// Always `false`; the root scope is always present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterates every non-root scope in unspecified order.
    pub fn scopes(&self) -> impl Iterator<Item = &FilterScope> {
        self.inner.scopes.values()
    }

    /// Returns the scope that starts the evaluation of `path`.
    ///
    /// The lookup begins at the directory containing `path` and walks toward
    /// the root until a registered scope is found.
    #[must_use]
    pub fn resolve(&self, path: &Path) -> &FilterScope {
        self.nearest(path.parent().unwrap_or_else(|| Path::new("")))
    }

    pub(crate) fn nearest(&self, dir: &Path) -> &FilterScope {
        let mut current = Some(dir);
        while let Some(dir) = current {
            if let Some(scope) = self.inner.scopes.get(dir) {
                return scope;
            }
            current = dir.parent();
        }
        &self.inner.root
    }
}

/// Incrementally assembles a [`ScopeTable`].
///
/// Rules are kept as plain [`Rule`] values until [`build`](Self::build)
/// compiles them, so construction order does not matter for error reporting.
#[derive(Clone, Debug, Default)]
pub struct ScopeTableBuilder {
    root: Vec<Rule>,
    scopes: FxHashMap<PathBuf, Vec<Rule>>,
}

impl ScopeTableBuilder {
    /// Starts a table whose root scope holds `root_rules`.
    #[must_use]
    pub fn new<I>(root_rules: I) -> Self
    where
        I: IntoIterator<Item = Rule>,
    {
        Self {
            root: root_rules.into_iter().collect(),
            scopes: FxHashMap::default(),
        }
    }

    /// Inserts `rules` at the front of the scope for `dir`.
    ///
    /// `dir` is relative to the package root; an empty path or `.` names the
    /// root scope. Rules added later therefore run before rules added
    /// earlier for the same directory.
    pub fn prepend<I>(&mut self, dir: impl AsRef<Path>, rules: I) -> &mut Self
    where
        I: IntoIterator<Item = Rule>,
    {
        let dir = normalize_dir(dir.as_ref());
        let target = if dir.as_os_str().is_empty() {
            &mut self.root
        } else {
            self.scopes.entry(dir).or_default()
        };
        let existing = std::mem::take(target);
        target.extend(rules);
        target.extend(existing);
        self
    }

    /// Compiles every rule and freezes the table.
    ///
    /// Directories left without rules get no scope of their own and defer to
    /// their ancestors.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] for the first pattern that fails to compile.
    pub fn build(self) -> Result<ScopeTable, PatternError> {
        let root = compile_scope(PathBuf::new(), self.root)?;
        let mut scopes = FxHashMap::default();
        for (dir, rules) in self.scopes {
            if rules.is_empty() {
                continue;
            }
            let scope = compile_scope(dir.clone(), rules)?;
            logging::trace_filter!(
                "scope {} holds {} rules",
                dir.display(),
                scope.rules.len()
            );
            scopes.insert(dir, scope);
        }
        logging::trace_filter!(
            "root scope holds {} rules, {} nested scopes",
            root.rules.len(),
            scopes.len()
        );
        Ok(ScopeTable {
            inner: Arc::new(ScopeTableInner { root, scopes }),
        })
    }
}

fn compile_scope(dir: PathBuf, rules: Vec<Rule>) -> Result<FilterScope, PatternError> {
    let rules = rules
        .into_iter()
        .map(CompiledRule::new)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(FilterScope { dir, rules })
}

/// Drops `.` and root components so `./docs/` and `docs` share a key.
fn normalize_dir(dir: &Path) -> PathBuf {
    dir.components()
        .filter(|component| matches!(component, Component::Normal(_) | Component::ParentDir))
        .collect()
}
