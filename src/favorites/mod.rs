//! Per-project favorite flags
//!
//! A favorite is a user-local boolean preference, persisted independently of
//! server data in an injected [`KeyValueStore`]. Marking writes a sentinel
//! value under the project's name; unmarking removes the key entirely.

pub mod sqlite;
pub mod store;

pub use sqlite::SqliteStore;
pub use store::{KeyValueStore, StoreError};

use crate::project::Project;

/// Value stored for a favorited project; anything else reads as not-favorite
const FAVORITE_SENTINEL: &str = "favorite";

/// Favorite flag store over an injected key-value capability
pub struct FavoriteStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> FavoriteStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Whether the project is marked favorite. An absent key or any value
    /// other than the sentinel reads as false.
    pub fn is_favorite(&self, project_name: &str) -> Result<bool, StoreError> {
        let value = self.store.get(project_name)?;
        Ok(value.as_deref() == Some(FAVORITE_SENTINEL))
    }

    /// Mark or unmark a project. Unmarking removes the key rather than
    /// writing a tombstone value.
    pub fn set_favorite(&self, project_name: &str, favorite: bool) -> Result<(), StoreError> {
        if favorite {
            self.store.set(project_name, FAVORITE_SENTINEL)
        } else {
            self.store.remove(project_name)
        }
    }

    /// Stably reorder a project list so favorites come first. Relative order
    /// within the favorite and non-favorite groups is preserved. On a storage
    /// failure the list is left exactly as it was.
    pub fn sort_favorites_first(&self, projects: &mut Vec<Project>) -> Result<(), StoreError> {
        // Read every flag before touching the list, so a failure mid-read
        // cannot leave the caller with a partially consumed Vec.
        let flags = projects
            .iter()
            .map(|project| self.is_favorite(&project.name))
            .collect::<Result<Vec<bool>, StoreError>>()?;

        let mut flagged: Vec<(bool, Project)> =
            flags.into_iter().zip(projects.drain(..)).collect();
        flagged.sort_by_key(|(favorite, _)| !favorite);
        projects.extend(flagged.into_iter().map(|(_, project)| project));

        Ok(())
    }
}
