//! Total order over version descriptors

use std::cmp::Ordering;

use crate::project::ProjectVersion;
use crate::version::semver::coerce_version;

/// Compare two versions for ranking purposes.
///
/// Policy, first matching rule wins:
/// 1. A version carrying the literal `latest` tag outranks everything.
///    Both carrying it compare equal, keeping the order argument-symmetric.
/// 2. If both names coerce to semantic versions, semver precedence decides
///    (1.2.3 < 1.10.0, pre-releases below their release).
/// 3. Otherwise, case-sensitive lexical comparison of the raw names.
pub fn compare_versions(a: &ProjectVersion, b: &ProjectVersion) -> Ordering {
    match (a.has_latest_tag(), b.has_latest_tag()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => match (coerce_version(&a.name), coerce_version(&b.name)) {
            (Some(va), Some(vb)) => va.cmp(&vb),
            _ => a.name.cmp(&b.name),
        },
    }
}
