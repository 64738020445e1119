//! Amenity service — use-cases for managing amenities.

use stays_domain::amenity::{Amenity, AmenityPatch};
use stays_domain::error::{NotFoundError, StaysError};
use stays_domain::id::AmenityId;

use crate::ports::AmenityRepository;

/// Application service for amenity CRUD operations.
pub struct AmenityService<R> {
    repo: R,
}

impl<R: AmenityRepository> AmenityService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn create_amenity(&self, amenity: Amenity) -> Result<Amenity, StaysError> {
        self.repo.create(amenity).await
    }

    /// # Errors
    ///
    /// Returns [`StaysError::NotFound`] when no amenity with `id` exists.
    pub async fn get_amenity(&self, id: AmenityId) -> Result<Amenity, StaysError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Amenity",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_amenities(&self) -> Result<Vec<Amenity>, StaysError> {
        self.repo.get_all().await
    }

    /// # Errors
    ///
    /// Returns [`StaysError::NotFound`] if the amenity does not exist.
    pub async fn update_amenity(
        &self,
        id: AmenityId,
        patch: AmenityPatch,
    ) -> Result<Amenity, StaysError> {
        let mut amenity = self.get_amenity(id).await?;
        amenity.apply(patch);
        self.repo.update(amenity).await
    }

    /// # Errors
    ///
    /// Returns [`StaysError::NotFound`] if the amenity does not exist.
    pub async fn delete_amenity(&self, id: AmenityId) -> Result<(), StaysError> {
        let amenity = self.get_amenity(id).await?;
        self.repo.delete(amenity.id).await
    }

    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn count_amenities(&self) -> Result<u64, StaysError> {
        self.repo.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::memory::InMemoryAmenities;

    fn make_service() -> AmenityService<InMemoryAmenities> {
        AmenityService::new(InMemoryAmenities::default())
    }

    #[tokio::test]
    async fn should_create_and_fetch_amenity() {
        let svc = make_service();
        let amenity = Amenity::new("wifi");
        let id = amenity.id;

        svc.create_amenity(amenity).await.unwrap();

        let fetched = svc.get_amenity(id).await.unwrap();
        assert_eq!(fetched.name, "wifi");
    }

    #[tokio::test]
    async fn should_return_not_found_when_amenity_missing() {
        let svc = make_service();
        let result = svc.get_amenity(AmenityId::new()).await;
        assert!(matches!(result, Err(StaysError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_update_amenity_name() {
        let svc = make_service();
        let amenity = Amenity::new("wifi");
        let id = amenity.id;
        svc.create_amenity(amenity).await.unwrap();

        let updated = svc
            .update_amenity(
                id,
                AmenityPatch {
                    name: Some("fast wifi".to_string()),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "fast wifi");
        assert_eq!(updated.id, id);
    }

    #[tokio::test]
    async fn should_delete_then_miss() {
        let svc = make_service();
        let amenity = Amenity::new("pool");
        let id = amenity.id;
        svc.create_amenity(amenity).await.unwrap();

        svc.delete_amenity(id).await.unwrap();

        assert!(matches!(
            svc.get_amenity(id).await,
            Err(StaysError::NotFound(_))
        ));
    }
}
