//! City service — use-cases for managing cities within a state.

use stays_domain::city::{City, CityPatch};
use stays_domain::error::{NotFoundError, StaysError};
use stays_domain::id::{CityId, StateId};

use crate::ports::{CityRepository, StateRepository};

/// Application service for city CRUD operations.
///
/// Creation and the nested listing resolve the owning state first; an
/// unknown state surfaces as `NotFound` before any payload is touched.
pub struct CityService<R, S> {
    repo: R,
    states: S,
}

impl<R: CityRepository, S: StateRepository> CityService<R, S> {
    /// Create a new service backed by the given repositories.
    pub fn new(repo: R, states: S) -> Self {
        Self { repo, states }
    }

    async fn resolve_state(&self, state_id: StateId) -> Result<(), StaysError> {
        self.states
            .get_by_id(state_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| {
                NotFoundError {
                    entity: "State",
                    id: state_id.to_string(),
                }
                .into()
            })
    }

    /// Create a city under an existing state.
    ///
    /// # Errors
    ///
    /// Returns [`StaysError::NotFound`] when the state does not exist,
    /// or a storage error from the repository.
    pub async fn create_city(
        &self,
        state_id: StateId,
        name: impl Into<String> + Send,
    ) -> Result<City, StaysError> {
        self.resolve_state(state_id).await?;
        let city = City::new(name, state_id);
        tracing::debug!(id = %city.id, state_id = %state_id, "creating city");
        self.repo.create(city).await
    }

    /// # Errors
    ///
    /// Returns [`StaysError::NotFound`] when no city with `id` exists.
    pub async fn get_city(&self, id: CityId) -> Result<City, StaysError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "City",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List the cities of an existing state.
    ///
    /// # Errors
    ///
    /// Returns [`StaysError::NotFound`] when the state does not exist.
    pub async fn list_cities_of_state(&self, state_id: StateId) -> Result<Vec<City>, StaysError> {
        self.resolve_state(state_id).await?;
        self.repo.find_by_state(state_id).await
    }

    /// # Errors
    ///
    /// Returns [`StaysError::NotFound`] if the city does not exist.
    pub async fn update_city(&self, id: CityId, patch: CityPatch) -> Result<City, StaysError> {
        let mut city = self.get_city(id).await?;
        city.apply(patch);
        self.repo.update(city).await
    }

    /// # Errors
    ///
    /// Returns [`StaysError::NotFound`] if the city does not exist.
    pub async fn delete_city(&self, id: CityId) -> Result<(), StaysError> {
        let city = self.get_city(id).await?;
        self.repo.delete(city.id).await
    }

    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn count_cities(&self) -> Result<u64, StaysError> {
        self.repo.count().await
    }
}
