use std::path::{Component, Path};

/// Directory every entry is placed under inside the tarball.
pub const ENTRY_PREFIX: &str = "package";

/// Maps a path relative to the package root to its name inside the archive.
///
/// Separators are normalised to `/` and `.` components are dropped.
///
/// ```
/// use archive::entry_name;
/// use std::path::Path;
///
/// assert_eq!(entry_name(Path::new("lib/index.js")), "package/lib/index.js");
/// assert_eq!(entry_name(Path::new("./README.md")), "package/README.md");
/// ```
#[must_use]
pub fn entry_name(relative: &Path) -> String {
    let mut name = String::from(ENTRY_PREFIX);
    for component in relative.components() {
        if let Component::Normal(part) = component {
            name.push('/');
            name.push_str(&part.to_string_lossy());
        }
    }
    name
}

/// Default file name for a package's tarball.
///
/// A scoped name `@scope/name` becomes `scope-name`.
///
/// ```
/// use archive::tarball_file_name;
///
/// assert_eq!(tarball_file_name("left-pad", "1.3.0"), "left-pad-v1.3.0.tgz");
/// assert_eq!(tarball_file_name("@acme/tools", "2.0.0"), "acme-tools-v2.0.0.tgz");
/// ```
#[must_use]
pub fn tarball_file_name(name: &str, version: &str) -> String {
    let name = name.strip_prefix('@').unwrap_or(name);
    let name = name.replacen('/', "-", 1);
    format!("{name}-v{version}.tgz")
}
