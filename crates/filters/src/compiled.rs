use std::path::Path;

use globset::{Glob, GlobBuilder, GlobSet, GlobSetBuilder};

use crate::{PatternError, Rule};

/// A [`Rule`] paired with the glob matcher built from its pattern.
#[derive(Clone, Debug)]
pub(crate) struct CompiledRule {
    pub(crate) rule: Rule,
    matcher: GlobSet,
}

impl CompiledRule {
    pub(crate) fn new(rule: Rule) -> Result<Self, PatternError> {
        let mut builder = GlobSetBuilder::new();
        builder.add(build_glob(&rule.pattern)?);
        if rule.descendants {
            if let Some(nested) = descendant_pattern(&rule.pattern) {
                builder.add(build_glob(&nested)?);
            }
        }
        let matcher = builder
            .build()
            .map_err(|error| PatternError::new(rule.pattern.clone(), error))?;
        Ok(Self { rule, matcher })
    }

    pub(crate) fn matches(&self, path: &Path) -> bool {
        self.matcher.is_match(path)
    }
}

fn build_glob(pattern: &str) -> Result<Glob, PatternError> {
    GlobBuilder::new(pattern)
        .case_insensitive(true)
        .literal_separator(true)
        .backslash_escape(true)
        .build()
        .map_err(|error| PatternError::new(pattern, error))
}

fn descendant_pattern(pattern: &str) -> Option<String> {
    if pattern.is_empty() || pattern == "**" || pattern.ends_with("/**") {
        None
    } else {
        Some(format!("{pattern}/**"))
    }
}
