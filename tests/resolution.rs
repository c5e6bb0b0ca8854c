//! End-to-end resolution flow: raw project data through hidden-filtering,
//! current-version selection, and search, the way a portal frontend uses it.

use docport::project::{Project, ProjectVersion};
use docport::search::{VersionHit, search};
use docport::version::resolve::{filter_hidden, pick_current, sorted_for_display};

fn version(name: &str) -> ProjectVersion {
    ProjectVersion::new(name)
}

fn tagged(name: &str, tags: &[&str]) -> ProjectVersion {
    ProjectVersion {
        name: name.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        hidden: false,
    }
}

fn hidden(name: &str) -> ProjectVersion {
    ProjectVersion {
        hidden: true,
        ..ProjectVersion::new(name)
    }
}

fn portal_fixture() -> Vec<Project> {
    vec![
        Project {
            name: "payment-api".to_string(),
            versions: vec![
                version("1.2.3"),
                version("1.10.0"),
                tagged("2.0.0", &["latest", "stable"]),
                hidden("0.1.0"),
            ],
        },
        Project {
            name: "payment-sdk".to_string(),
            versions: vec![version("0.4.0"), version("0.5.0-rc.1")],
        },
        Project {
            name: "internal-tools".to_string(),
            versions: vec![hidden("1.0.0")],
        },
    ]
}

#[test]
fn filtered_view_drops_hidden_versions_and_empty_projects() {
    let projects = portal_fixture();

    let filtered = filter_hidden(&projects);

    let names: Vec<&str> = filtered.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["payment-api", "payment-sdk"]);
    assert_eq!(filtered[0].versions.len(), 3);
}

#[test]
fn current_version_of_each_filtered_project() {
    let filtered = filter_hidden(&portal_fixture());

    let current = pick_current(&filtered[0].versions).unwrap();
    assert_eq!(current.name, "2.0.0"); // latest tag wins over 1.10.0

    let current = pick_current(&filtered[1].versions).unwrap();
    assert_eq!(current.name, "0.5.0-rc.1"); // semantic max, no latest signals
}

#[test]
fn display_order_matches_current_version_choice() {
    let filtered = filter_hidden(&portal_fixture());

    let sorted = sorted_for_display(&filtered[0].versions);
    let current = pick_current(&filtered[0].versions).unwrap();

    assert_eq!(sorted[0].name, current.name);
    let names: Vec<&str> = sorted.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, vec!["2.0.0", "1.10.0", "1.2.3"]);
}

#[test]
fn search_spans_projects_versions_and_tags() {
    let projects = portal_fixture();

    let result = search(&projects, "payment");
    assert_eq!(result.projects.len(), 2);

    let result = search(&projects, "stable");
    assert_eq!(
        result.versions,
        vec![VersionHit {
            project: "payment-api".to_string(),
            version: "stable".to_string()
        }]
    );
}

#[test]
fn search_never_surfaces_hidden_content() {
    let projects = portal_fixture();

    // internal-tools matches by name but has no visible version
    assert!(search(&projects, "internal").projects.is_empty());

    // 0.1.0 exists only as a hidden version
    assert!(search(&projects, "0.1.0").versions.is_empty());
}
