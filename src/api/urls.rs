//! URL builders for portal resources
//!
//! Pure string interpolation, no validation or encoding logic.

/// URL of a project's logo: `/{resource}/{project}/logo`
pub fn logo_url(resource: &str, project: &str) -> String {
    format!("/{}/{}/logo", resource, project)
}

/// URL of a documentation page: `/{resource}/{project}/{version}/{path?}`
///
/// Without a page path the URL keeps its trailing slash, addressing the
/// version's index page so relative asset links inside the rendered docs
/// resolve against the version directory.
pub fn docs_url(resource: &str, project: &str, version: &str, path: Option<&str>) -> String {
    match path {
        Some(path) => format!("/{}/{}/{}/{}", resource, project, version, path),
        None => format!("/{}/{}/{}/", resource, project, version),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logo_url_interpolates_resource_and_project() {
        assert_eq!(logo_url("doc", "my-project"), "/doc/my-project/logo");
    }

    #[test]
    fn docs_url_with_page_path() {
        assert_eq!(
            docs_url("doc", "my-project", "1.0.0", Some("index.html")),
            "/doc/my-project/1.0.0/index.html"
        );
    }

    #[test]
    fn docs_url_without_page_path_ends_with_slash() {
        assert_eq!(
            docs_url("doc", "my-project", "latest", None),
            "/doc/my-project/latest/"
        );
    }
}
