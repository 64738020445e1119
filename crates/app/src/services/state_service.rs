//! State service — use-cases for managing states.

use stays_domain::error::{NotFoundError, StaysError};
use stays_domain::id::StateId;
use stays_domain::state::{State, StatePatch};

use crate::ports::StateRepository;

/// Application service for state CRUD operations.
pub struct StateService<R> {
    repo: R,
}

impl<R: StateRepository> StateService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Persist a freshly constructed state.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn create_state(&self, state: State) -> Result<State, StaysError> {
        tracing::debug!(id = %state.id, "creating state");
        self.repo.create(state).await
    }

    /// Look up a state by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`StaysError::NotFound`] when no state with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_state(&self, id: StateId) -> Result<State, StaysError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "State",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all states.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_states(&self) -> Result<Vec<State>, StaysError> {
        self.repo.get_all().await
    }

    /// Apply a partial update to an existing state.
    ///
    /// # Errors
    ///
    /// Returns [`StaysError::NotFound`] if the state does not exist,
    /// or a storage error from the repository.
    pub async fn update_state(&self, id: StateId, patch: StatePatch) -> Result<State, StaysError> {
        let mut state = self.get_state(id).await?;
        state.apply(patch);
        self.repo.update(state).await
    }

    /// Delete a state by id.
    ///
    /// # Errors
    ///
    /// Returns [`StaysError::NotFound`] if the state does not exist,
    /// or a storage error from the repository.
    pub async fn delete_state(&self, id: StateId) -> Result<(), StaysError> {
        let state = self.get_state(id).await?;
        tracing::debug!(id = %state.id, "deleting state");
        self.repo.delete(state.id).await
    }

    /// Number of stored states, for `/stats`.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn count_states(&self) -> Result<u64, StaysError> {
        self.repo.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::memory::InMemoryStates;

    fn make_service() -> StateService<InMemoryStates> {
        StateService::new(InMemoryStates::default())
    }

    #[tokio::test]
    async fn should_create_and_fetch_state() {
        let svc = make_service();
        let state = State::new("California");
        let id = state.id;

        svc.create_state(state).await.unwrap();

        let fetched = svc.get_state(id).await.unwrap();
        assert_eq!(fetched.name, "California");
    }

    #[tokio::test]
    async fn should_return_not_found_when_state_missing() {
        let svc = make_service();
        let result = svc.get_state(StateId::new()).await;
        assert!(matches!(result, Err(StaysError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_list_all_states() {
        let svc = make_service();
        svc.create_state(State::new("California")).await.unwrap();
        svc.create_state(State::new("Nevada")).await.unwrap();

        let all = svc.list_states().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(svc.count_states().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn should_keep_id_and_created_at_when_updating() {
        let svc = make_service();
        let state = State::new("California");
        let id = state.id;
        let created = state.created_at;
        svc.create_state(state).await.unwrap();

        let updated = svc
            .update_state(
                id,
                StatePatch {
                    name: Some("Oregon".to_string()),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Oregon");
        assert_eq!(updated.id, id);
        assert_eq!(updated.created_at, created);
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_missing_state() {
        let svc = make_service();
        let result = svc.update_state(StateId::new(), StatePatch::default()).await;
        assert!(matches!(result, Err(StaysError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_delete_state_once() {
        let svc = make_service();
        let state = State::new("California");
        let id = state.id;
        svc.create_state(state).await.unwrap();

        svc.delete_state(id).await.unwrap();

        // second delete resolves nothing
        let result = svc.delete_state(id).await;
        assert!(matches!(result, Err(StaysError::NotFound(_))));
    }
}
