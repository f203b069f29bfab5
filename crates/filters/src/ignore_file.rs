//! Compilation of ignore-file text into [`Rule`]s.
//!
//! Ignore files follow the familiar VCS conventions: one pattern per line,
//! `#` starts a comment, a leading `!` re-includes, a trailing `/` is
//! dropped, a leading `/` anchors to the file's directory and a pattern
//! without any `/` matches at any depth. A plain line excludes on match and
//! every rule covers the descendants of what it matches.

use std::path::{Path, PathBuf};

use crate::Rule;

/// Rules compiled from one ignore file, anchored to its directory.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct IgnoreFile {
    anchor: PathBuf,
    rules: Vec<Rule>,
}

impl IgnoreFile {
    /// Compiles `contents` into rules anchored at `anchor`.
    ///
    /// `anchor` is the directory containing the ignore file, relative to the
    /// package root. Lines that carry no pattern are skipped and rule order
    /// follows line order.
    ///
    /// ```
    /// use filters::IgnoreFile;
    ///
    /// let file = IgnoreFile::compile("# build output\ndist/\n!dist/keep.js\n", "");
    /// let rules: Vec<String> = file.rules().iter().map(ToString::to_string).collect();
    /// assert_eq!(rules, ["!dist", "dist/keep.js"]);
    /// ```
    #[must_use]
    pub fn compile(contents: &str, anchor: impl Into<PathBuf>) -> Self {
        Self {
            anchor: anchor.into(),
            rules: contents.lines().filter_map(parse_line).collect(),
        }
    }

    /// Returns the directory the rules are anchored to.
    #[must_use]
    pub fn anchor(&self) -> &Path {
        &self.anchor
    }

    /// Returns the compiled rules in file order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Reports whether the file produced no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Consumes the file, returning its rules.
    #[must_use]
    pub fn into_rules(self) -> Vec<Rule> {
        self.rules
    }
}

/// Parses a single ignore-file line.
///
/// Returns `None` for blank lines, comments and lines reduced to nothing
/// once the `!` prefix and trailing slashes are removed.
#[must_use]
pub fn parse_line(line: &str) -> Option<Rule> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }

    let (reinclude, body) = match trimmed.strip_prefix('!') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    let body = body.trim_end_matches('/');
    if body.is_empty() {
        return None;
    }

    let pattern = anchored_pattern(body)?;
    let rule = if reinclude {
        Rule::include(pattern)
    } else {
        Rule::exclude(pattern)
    };
    Some(rule.with_descendants(true))
}

fn anchored_pattern(body: &str) -> Option<String> {
    if let Some(rooted) = body.strip_prefix('/') {
        let rooted = rooted.trim_start_matches('/');
        return (!rooted.is_empty()).then(|| rooted.to_owned());
    }
    if body.contains('/') || body == "**" {
        Some(body.to_owned())
    } else {
        Some(format!("**/{body}"))
    }
}
