//! User service — use-cases for managing user accounts.

use stays_domain::error::{NotFoundError, StaysError};
use stays_domain::id::UserId;
use stays_domain::user::{User, UserPatch};

use crate::ports::UserRepository;

/// Application service for user CRUD operations.
pub struct UserService<R> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn create_user(&self, user: User) -> Result<User, StaysError> {
        tracing::debug!(id = %user.id, "creating user");
        self.repo.create(user).await
    }

    /// # Errors
    ///
    /// Returns [`StaysError::NotFound`] when no user with `id` exists.
    pub async fn get_user(&self, id: UserId) -> Result<User, StaysError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "User",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_users(&self) -> Result<Vec<User>, StaysError> {
        self.repo.get_all().await
    }

    /// Apply a partial update. The patch type carries no email field, so
    /// email stays what it was at registration.
    ///
    /// # Errors
    ///
    /// Returns [`StaysError::NotFound`] if the user does not exist.
    pub async fn update_user(&self, id: UserId, patch: UserPatch) -> Result<User, StaysError> {
        let mut user = self.get_user(id).await?;
        user.apply(patch);
        self.repo.update(user).await
    }

    /// # Errors
    ///
    /// Returns [`StaysError::NotFound`] if the user does not exist.
    pub async fn delete_user(&self, id: UserId) -> Result<(), StaysError> {
        let user = self.get_user(id).await?;
        self.repo.delete(user.id).await
    }

    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn count_users(&self) -> Result<u64, StaysError> {
        self.repo.count().await
    }
}
