//! Common types for projects and their documented versions

use serde::{Deserialize, Serialize};

/// One published version of a documentation project.
///
/// `name` is a free-form identifier ("1.2.3", "latest", "dev") and is not
/// required to be valid semver. Tag order is preserved for display; the
/// literal tag `latest` carries special ordering significance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectVersion {
    pub name: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Hidden versions are excluded from default listings, search, and
    /// latest-version resolution.
    #[serde(default)]
    pub hidden: bool,
}

impl ProjectVersion {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            tags: Vec::new(),
            hidden: false,
        }
    }

    /// Whether this version carries the literal `latest` tag
    pub fn has_latest_tag(&self) -> bool {
        self.tags.iter().any(|t| t == "latest")
    }
}

/// A named documentation project and its versions.
///
/// Version names are unique within one project. A project whose versions are
/// all hidden is not eligible for default listing or search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub versions: Vec<ProjectVersion>,
}

impl Project {
    /// Whether at least one version is visible to users
    pub fn has_visible_version(&self) -> bool {
        self.versions.iter().any(|v| !v.hidden)
    }
}
