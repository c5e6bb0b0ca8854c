use std::sync::LazyLock;

use regex::Regex;
use semver::Version;

/// First major[.minor[.patch]] run in a name, with an optional pre-release
/// suffix. Build metadata and any surrounding text are ignored.
static VERSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)(?:\.(\d+))?(?:\.(\d+))?(?:-([0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?")
        .expect("version pattern is valid")
});

/// Coerce a free-form version name into a semver::Version.
///
/// Permissive by design: version names in the wild carry prefixes ("v1.2.3"),
/// build metadata ("1.2.3+abc"), or partial numbers ("1.2"). Partial versions
/// are padded with zeros. Returns None when the name contains no recognizable
/// version pattern (e.g. "latest", "dev").
///
/// Examples:
/// - "v1" -> Version(1, 0, 0)
/// - "1.2" -> Version(1, 2, 0)
/// - "release-1.2.3+build" -> Version(1, 2, 3)
/// - "1.0.0-beta.2" -> Version(1, 0, 0, pre: beta.2)
pub fn coerce_version(name: &str) -> Option<Version> {
    let caps = VERSION_PATTERN.captures(name)?;

    let major = caps.get(1)?.as_str();
    let minor = caps.get(2).map_or("0", |m| m.as_str());
    let patch = caps.get(3).map_or("0", |m| m.as_str());

    let normalized = match caps.get(4) {
        Some(pre) => format!("{}.{}.{}-{}", major, minor, patch, pre.as_str()),
        None => format!("{}.{}.{}", major, minor, patch),
    };

    Version::parse(&normalized).ok()
}
