use std::fmt;

/// User-visible selection rule consisting of a glob pattern and a polarity.
///
/// A matching include rule sets the verdict to "keep" while a matching
/// exclude (negated) rule sets it to "drop". Rules are plain data; glob
/// compilation happens when a [`ScopeTable`](crate::ScopeTable) is built.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Rule {
    pub(crate) pattern: String,
    pub(crate) negated: bool,
    pub(crate) descendants: bool,
}

impl Rule {
    /// Creates an include rule for `pattern`.
    #[must_use]
    pub fn include(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            negated: false,
            descendants: false,
        }
    }

    /// Creates an exclude rule for `pattern`.
    #[must_use]
    pub fn exclude(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            negated: true,
            descendants: false,
        }
    }

    /// Parses the `!pattern` shorthand used by the built-in tables.
    ///
    /// A single leading `!` produces an exclude rule; anything else is an
    /// include rule for the text as written.
    ///
    /// ```
    /// use filters::Rule;
    ///
    /// assert!(Rule::parse("!**/*.swp").is_negated());
    /// assert_eq!(Rule::parse("!**/*.swp").pattern(), "**/*.swp");
    /// assert!(!Rule::parse("lib/**").is_negated());
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Self {
        match text.strip_prefix('!') {
            Some(pattern) => Self::exclude(pattern),
            None => Self::include(text),
        }
    }

    /// Extends the rule so it also matches every path below a match.
    #[must_use]
    pub const fn with_descendants(mut self, descendants: bool) -> Self {
        self.descendants = descendants;
        self
    }

    /// Returns the glob pattern text.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Reports whether a match drops the path.
    #[must_use]
    pub const fn is_negated(&self) -> bool {
        self.negated
    }

    /// Reports whether the rule also covers descendants of a match.
    #[must_use]
    pub const fn covers_descendants(&self) -> bool {
        self.descendants
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            f.write_str("!")?;
        }
        f.write_str(&self.pattern)
    }
}
