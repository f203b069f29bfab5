//! Selection of the authoritative ignore file for a directory.

use crate::defaults::IGNORE_FILE_NAMES;

/// Decides which ignore file governs a directory.
///
/// Implementations are pure functions over the names of the files found
/// directly inside one directory. At most one name is returned.
pub trait IgnorePolicy: Send + Sync {
    /// Picks the governing ignore file among `names`, if any.
    fn select<'a>(&self, names: &[&'a str]) -> Option<&'a str>;

    /// Reports whether `name` could ever be picked by this policy.
    fn is_candidate(&self, name: &str) -> bool;
}

/// Picks the first present name from a fixed priority list.
///
/// The default list is `.yarnignore`, `.npmignore`, `.gitignore`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PriorityPolicy {
    names: Vec<String>,
}

impl PriorityPolicy {
    /// Creates a policy preferring earlier entries of `names`.
    #[must_use]
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the configured names in priority order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl Default for PriorityPolicy {
    fn default() -> Self {
        Self::new(IGNORE_FILE_NAMES.iter().copied())
    }
}

impl IgnorePolicy for PriorityPolicy {
    fn select<'a>(&self, names: &[&'a str]) -> Option<&'a str> {
        self.names
            .iter()
            .find_map(|wanted| names.iter().copied().find(|name| *name == wanted.as_str()))
    }

    fn is_candidate(&self, name: &str) -> bool {
        self.names.iter().any(|wanted| wanted.as_str() == name)
    }
}
