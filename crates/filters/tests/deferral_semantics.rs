//! Tests for first-miss deferral between nested scopes.
//!
//! A nested scope only decides a path while its rules keep matching. The
//! first rule that misses hands the evaluation to the nearest scope above
//! it, even when a later rule in the same scope would have matched. These
//! tests pin that behaviour so a change to it is always deliberate.

use filters::{IgnoreFile, Rule, ScopeTableBuilder};
use std::path::Path;

fn broad_root() -> ScopeTableBuilder {
    ScopeTableBuilder::new([Rule::include("*"), Rule::include("*/**")])
}

// =============================================================================
// Single nested scope
// =============================================================================

#[test]
fn matching_first_rule_decides_in_nested_scope() {
    let mut builder = broad_root();
    builder.prepend("docs", IgnoreFile::compile("secret.md", "docs").into_rules());
    let table = builder.build().unwrap();

    assert!(!table.allows(Path::new("docs/secret.md")));
}

#[test]
fn missing_first_rule_defers_to_root() {
    let mut builder = broad_root();
    builder.prepend("docs", IgnoreFile::compile("secret.md", "docs").into_rules());
    let table = builder.build().unwrap();

    let decision = table.decide(Path::new("docs/other.md"));
    assert!(decision.keep());
    assert!(decision.scope().as_os_str().is_empty());
}

#[test]
fn second_rule_unreachable_after_first_miss() {
    let mut builder = broad_root();
    builder.prepend(
        "docs",
        IgnoreFile::compile("secret.md\nprivate.md\n", "docs").into_rules(),
    );
    let table = builder.build().unwrap();

    assert!(!table.allows(Path::new("docs/secret.md")));
    // `private.md` misses `secret.md` first and is decided by the root.
    assert!(table.allows(Path::new("docs/private.md")));
}

#[test]
fn reinclusion_after_exclusion_requires_both_to_match() {
    let mut builder = broad_root();
    builder.prepend(
        "lib",
        IgnoreFile::compile("*.js\n!keep.js\n", "lib").into_rules(),
    );
    let table = builder.build().unwrap();

    // Both rules match: the later re-inclusion wins.
    assert!(table.allows(Path::new("lib/keep.js")));
    // Only the first rule matches, the second misses and defers.
    assert!(table.allows(Path::new("lib/drop.js")));
    // The first rule misses immediately.
    assert!(table.allows(Path::new("lib/readme.txt")));
}

// =============================================================================
// Nested chains
// =============================================================================

#[test]
fn deferral_lands_on_nearest_scope_with_rules() {
    let mut builder = broad_root();
    builder.prepend("pkg", IgnoreFile::compile("/gen", "pkg").into_rules());
    builder.prepend("pkg/src/inner", IgnoreFile::compile("tmp", "pkg/src/inner").into_rules());
    let table = builder.build().unwrap();

    let decision = table.decide(Path::new("pkg/src/inner/gen/file.js"));
    assert!(decision.keep());
    assert_eq!(decision.deferrals(), 2);

    let anchored = table.decide(Path::new("pkg/gen/file.js"));
    assert!(!anchored.keep());
    assert_eq!(anchored.scope(), Path::new("pkg"));
}

#[test]
fn deferred_scope_evaluates_path_relative_to_itself() {
    let mut builder = broad_root();
    builder.prepend("a", IgnoreFile::compile("/b/c/file.txt", "a").into_rules());
    builder.prepend("a/b", IgnoreFile::compile("unrelated", "a/b").into_rules());
    let table = builder.build().unwrap();

    let decision = table.decide(Path::new("a/b/c/file.txt"));
    assert!(!decision.keep());
    assert_eq!(decision.scope(), Path::new("a"));
    assert_eq!(decision.deferrals(), 1);
}

#[test]
fn root_scope_never_defers() {
    let table = ScopeTableBuilder::new([
        Rule::exclude("nothing"),
        Rule::include("*"),
        Rule::exclude("also-nothing"),
    ])
    .build()
    .unwrap();

    let decision = table.decide(Path::new("index.js"));
    assert!(decision.keep());
    assert_eq!(decision.deferrals(), 0);
    assert_eq!(decision.rule().map(Rule::pattern), Some("*"));
}
