//! Single-file JSON store shared by every repository in this adapter.
//!
//! The whole catalog lives in one serialized [`Index`]. Mutations take the
//! lock, update the in-memory index, and rewrite the file through a
//! temporary sibling followed by a rename, so a crash mid-write never
//! leaves a torn store behind.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};

use stays_domain::amenity::Amenity;
use stays_domain::city::City;
use stays_domain::id::{AmenityId, CityId, PlaceId, ReviewId, StateId, UserId};
use stays_domain::place::Place;
use stays_domain::review::Review;
use stays_domain::state::State;
use stays_domain::user::User;

use crate::error::StorageError;

/// The complete persisted catalog.
#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct Index {
    #[serde(default)]
    pub states: HashMap<StateId, State>,
    #[serde(default)]
    pub cities: HashMap<CityId, City>,
    #[serde(default)]
    pub amenities: HashMap<AmenityId, Amenity>,
    #[serde(default)]
    pub users: HashMap<UserId, User>,
    #[serde(default)]
    pub places: HashMap<PlaceId, Place>,
    #[serde(default)]
    pub reviews: HashMap<ReviewId, Review>,
    /// Place↔amenity membership as embedded id lists.
    #[serde(default)]
    pub place_amenities: HashMap<PlaceId, Vec<AmenityId>>,
}

/// File-backed store. Repositories share one instance behind an [`Arc`]
/// and serialize all access through the internal lock.
///
/// [`Arc`]: std::sync::Arc
pub struct JsonStore {
    path: PathBuf,
    index: Mutex<Index>,
}

impl JsonStore {
    /// Open the store at `path`, loading the existing index when the file
    /// is present and starting empty otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the file exists but cannot be read
    /// or parsed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let index = Self::load(&path)?;
        Ok(Self {
            path,
            index: Mutex::new(index),
        })
    }

    fn load(path: &Path) -> Result<Index, StorageError> {
        match std::fs::read(path) {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Index::default()),
            Err(err) => Err(err.into()),
        }
    }

    pub(crate) fn lock(&self) -> MutexGuard<'_, Index> {
        self.index.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Persist the given index snapshot. The caller holds the lock, so a
    /// commit always writes a consistent state.
    pub(crate) fn commit(&self, index: &Index) -> Result<(), StorageError> {
        let serialized = serde_json::to_vec_pretty(index)?;
        let tmp = self.path.with_extension("tmp");
        std::fs::write(&tmp, serialized)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_start_empty_when_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path().join("catalog.json")).unwrap();
        assert!(store.lock().states.is_empty());
    }

    #[test]
    fn should_reload_committed_index() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");

        let store = JsonStore::open(&path).unwrap();
        let state = State::new("California");
        let id = state.id;
        {
            let mut index = store.lock();
            index.states.insert(id, state);
            store.commit(&index).unwrap();
        }

        let reopened = JsonStore::open(&path).unwrap();
        let index = reopened.lock();
        assert_eq!(index.states.get(&id).unwrap().name, "California");
    }

    #[test]
    fn should_fail_to_open_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, b"not json at all").unwrap();

        assert!(JsonStore::open(&path).is_err());
    }
}
