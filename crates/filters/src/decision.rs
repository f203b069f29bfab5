use std::path::Path;

use crate::{Rule, ScopeTable};

/// Outcome of evaluating one path against a [`ScopeTable`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Decision<'a> {
    keep: bool,
    scope: &'a Path,
    rule: Option<&'a Rule>,
    deferrals: usize,
}

impl<'a> Decision<'a> {
    /// Returns `true` when the path is selected.
    #[must_use]
    pub const fn keep(&self) -> bool {
        self.keep
    }

    /// Directory of the scope that produced the verdict.
    #[must_use]
    pub const fn scope(&self) -> &'a Path {
        self.scope
    }

    /// Last rule that matched in the deciding scope, if any.
    #[must_use]
    pub const fn rule(&self) -> Option<&'a Rule> {
        self.rule
    }

    /// Number of times evaluation moved to an ancestor scope.
    #[must_use]
    pub const fn deferrals(&self) -> usize {
        self.deferrals
    }
}

impl ScopeTable {
    /// Evaluates `path` and reports how the verdict was reached.
    ///
    /// `path` is relative to the package root. Evaluation starts in the scope
    /// returned by [`resolve`](Self::resolve) with a verdict of "drop" and
    /// walks the scope's rules in order against the path relative to the
    /// scope directory. A matching rule overwrites the verdict. In a nested
    /// scope the first rule that does not match abandons the scope and the
    /// evaluation restarts in the nearest scope above it, whose verdict is
    /// returned as-is. The root scope never defers.
    ///
    /// Because a miss can happen before a later rule in the same scope gets a
    /// chance to match, only a leading run of matching rules in a nested
    /// scope can decide a path on its own.
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
    /// let hidden = table.decide(Path::new("docs/secret.md"));
    /// assert!(!hidden.keep());
    /// assert_eq!(hidden.scope(), Path::new("docs"));
    ///
    /// let deferred = table.decide(Path::new("docs/guide.md"));
    /// assert!(deferred.keep());
    /// assert_eq!(deferred.deferrals(), 1);
    /// ```
    #[must_use]
    pub fn decide<'a>(&'a self, path: &Path) -> Decision<'a> {
        let mut scope = self.resolve(path);
        let mut deferrals = 0;

        'scopes: loop {
            let relative = path.strip_prefix(&scope.dir).unwrap_or(path);
            let mut decision = Decision {
                keep: false,
                scope: &scope.dir,
                rule: None,
                deferrals,
            };

            for compiled in &scope.rules {
                if compiled.matches(relative) {
                    decision.keep = !compiled.rule.negated;
                    decision.rule = Some(&compiled.rule);
                } else if let Some(parent) = scope.parent_dir() {
                    scope = self.nearest(parent);
                    deferrals += 1;
                    continue 'scopes;
                }
            }

            logging::trace_verdict!(
                "{} -> {} (scope '{}', rule {}, deferred {}x)",
                path.display(),
                if decision.keep { "keep" } else { "drop" },
                decision.scope.display(),
                decision
                    .rule
                    .map_or_else(|| "<none>".to_owned(), ToString::to_string),
                decision.deferrals
            );
            return decision;
        }
    }

    /// Returns `true` if `path` is selected.
    #[must_use]
    pub fn allows(&self, path: &Path) -> bool {
        self.decide(path).keep
    }
}
