//! Free-text search across project names, version names, and tags
//!
//! Matching is case-insensitive substring containment; no fuzzy matching and
//! no ranking beyond the project/version/tag grouping. Hidden versions never
//! surface, and a project whose versions are all hidden never surfaces either.

use serde::{Deserialize, Serialize};

use crate::project::Project;

/// Project-level search match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectHit {
    pub name: String,
}

/// Version- or tag-level search match.
///
/// For tag matches, `version` holds the matched tag value rather than the
/// version name, so the tag itself becomes the navigable label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionHit {
    pub project: String,
    pub version: String,
}

/// Result of one search query, grouped by match kind
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub projects: Vec<ProjectHit>,
    pub versions: Vec<VersionHit>,
}

/// Search the full project list for a query.
///
/// The query is trimmed and lower-cased before matching. Version-name matches
/// are emitted before tag matches; within each group the input iteration
/// order is preserved. An empty or unmatched query yields an empty result.
pub fn search(projects: &[Project], query: &str) -> SearchResult {
    let query = query.trim().to_lowercase();

    let mut result = SearchResult::default();

    if query.is_empty() {
        return result;
    }

    for project in projects {
        if project.name.to_lowercase().contains(&query) && project.has_visible_version() {
            result.projects.push(ProjectHit {
                name: project.name.clone(),
            });
        }
    }

    for project in projects {
        for version in project.versions.iter().filter(|v| !v.hidden) {
            if version.name.to_lowercase().contains(&query) {
                result.versions.push(VersionHit {
                    project: project.name.clone(),
                    version: version.name.clone(),
                });
            }
        }
    }

    for project in projects {
        for version in project.versions.iter().filter(|v| !v.hidden) {
            for tag in &version.tags {
                if tag.to_lowercase().contains(&query) {
                    result.versions.push(VersionHit {
                        project: project.name.clone(),
                        version: tag.clone(),
                    });
                }
            }
        }
    }

    result
}
