//! Built-in policy tables.
//!
//! These tables are process-wide constants. The never-ignore and default
//! tables are written in the matcher's own syntax: numeric ranges become
//! character classes and optional-extension forms are split into two globs.

/// Version-control metadata folders excluded at any depth.
pub const FOLDERS_IGNORE: &[&str] = &[
    "**/.git/",
    "**/.git/**",
    "**/CVS",
    "**/CVS/**",
    "**/.svn",
    "**/.svn/**",
    "**/.hg",
    "**/.hg/**",
];

/// Editor, build and package-manager residue excluded at any depth.
///
/// The full default deny-list is [`FOLDERS_IGNORE`] followed by this table;
/// see [`default_ignore_patterns`].
pub const CRUFT_IGNORE: &[&str] = &[
    "**/.yarnignore",
    "**/.npmignore",
    "**/.gitignore",
    "**/.DS_Store",
    "**/yarn.lock",
    "**/.lock-wscript",
    "**/.wafpickle-[0-9]",
    "**/build/config.gypi",
    "**/*.swp",
    "**/._*",
    "**/*.orig",
    "**/npm-debug.log",
    "**/yarn-error.log",
    "**/.npmrc",
    "**/.yarnrc",
    "**/package-lock.json",
];

/// Files that are always shipped regardless of any other rule.
pub const NEVER_IGNORE: &[&str] = &[
    "package.json",
    "{readme,license,licence,notice,changes,changelog,history}",
    "{readme,license,licence,notice,changes,changelog,history}.*",
];

/// Directory names pruned from every traversal.
pub const VCS_FOLDER_NAMES: &[&str] = &[".git", "CVS", ".svn", ".hg"];

/// Directory holding installed dependencies.
pub const DEPENDENCY_FOLDER: &str = "node_modules";

/// Ignore-file names in their default priority order.
pub const IGNORE_FILE_NAMES: &[&str] = &[".yarnignore", ".npmignore", ".gitignore"];

/// Returns the default deny-list in table order.
///
/// ```
/// let patterns: Vec<_> = filters::default_ignore_patterns().collect();
/// assert_eq!(patterns.first(), Some(&"**/.git/"));
/// assert_eq!(patterns.last(), Some(&"**/package-lock.json"));
/// ```
pub fn default_ignore_patterns() -> impl Iterator<Item = &'static str> {
    FOLDERS_IGNORE.iter().chain(CRUFT_IGNORE).copied()
}
