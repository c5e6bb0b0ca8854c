use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("cannot pick a current version from an empty version list")]
    EmptyVersionList,
}
