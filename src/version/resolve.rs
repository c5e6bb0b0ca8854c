//! Hidden-version filtering and current-version selection

use crate::project::{Project, ProjectVersion};
use crate::version::compare::compare_versions;
use crate::version::error::ResolveError;

/// Return an independently-owned copy of the project list with hidden
/// versions removed. Projects left with no versions are dropped entirely.
/// The input is never mutated.
pub fn filter_hidden(projects: &[Project]) -> Vec<Project> {
    projects
        .iter()
        .map(|project| Project {
            name: project.name.clone(),
            versions: project
                .versions
                .iter()
                .filter(|v| !v.hidden)
                .cloned()
                .collect(),
        })
        .filter(|project| !project.versions.is_empty())
        .collect()
}

/// Select the version a portal should display by default.
///
/// Precedence:
/// 1. the first version whose name contains the substring `latest`;
/// 2. else the first version carrying the literal `latest` tag;
/// 3. else the maximum under [`compare_versions`].
///
/// Fails on an empty version list; callers filter hidden versions first.
pub fn pick_current(versions: &[ProjectVersion]) -> Result<&ProjectVersion, ResolveError> {
    if let Some(by_name) = versions.iter().find(|v| v.name.contains("latest")) {
        return Ok(by_name);
    }

    if let Some(by_tag) = versions.iter().find(|v| v.has_latest_tag()) {
        return Ok(by_tag);
    }

    versions
        .iter()
        .max_by(|a, b| compare_versions(a, b))
        .ok_or(ResolveError::EmptyVersionList)
}

/// Sorted copy of a version list, newest first, for display and navigation.
/// The caller's slice is left untouched.
pub fn sorted_for_display(versions: &[ProjectVersion]) -> Vec<ProjectVersion> {
    let mut sorted = versions.to_vec();
    sorted.sort_by(|a, b| compare_versions(b, a));
    sorted
}
