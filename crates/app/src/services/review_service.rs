//! Review service — use-cases for managing reviews of a place.

use stays_domain::error::{NotFoundError, StaysError};
use stays_domain::id::{PlaceId, ReviewId, UserId};
use stays_domain::review::{Review, ReviewPatch};

use crate::ports::{PlaceRepository, ReviewRepository, UserRepository};

/// Application service for review CRUD operations.
pub struct ReviewService<R, P, U> {
    repo: R,
    places: P,
    users: U,
}

impl<R, P, U> ReviewService<R, P, U>
where
    R: ReviewRepository,
    P: PlaceRepository,
    U: UserRepository,
{
    pub fn new(repo: R, places: P, users: U) -> Self {
        Self { repo, places, users }
    }

    async fn resolve_place(&self, place_id: PlaceId) -> Result<(), StaysError> {
        self.places
            .get_by_id(place_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| {
                NotFoundError {
                    entity: "Place",
                    id: place_id.to_string(),
                }
                .into()
            })
    }

    /// Create a review of an existing place by an existing user.
    ///
    /// # Errors
    ///
    /// Returns [`StaysError::NotFound`] when the place or the user does
    /// not exist, or a storage error from the repository.
    pub async fn create_review(
        &self,
        place_id: PlaceId,
        user_id: UserId,
        text: impl Into<String> + Send,
    ) -> Result<Review, StaysError> {
        self.resolve_place(place_id).await?;
        if self.users.get_by_id(user_id).await?.is_none() {
            return Err(NotFoundError {
                entity: "User",
                id: user_id.to_string(),
            }
            .into());
        }
        self.repo.create(Review::new(place_id, user_id, text)).await
    }

    /// # Errors
    ///
    /// Returns [`StaysError::NotFound`] when no review with `id` exists.
    pub async fn get_review(&self, id: ReviewId) -> Result<Review, StaysError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Review",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List the reviews of an existing place.
    ///
    /// # Errors
    ///
    /// Returns [`StaysError::NotFound`] when the place does not exist.
    pub async fn list_reviews_of_place(&self, place_id: PlaceId) -> Result<Vec<Review>, StaysError> {
        self.resolve_place(place_id).await?;
        self.repo.find_by_place(place_id).await
    }

    /// # Errors
    ///
    /// Returns [`StaysError::NotFound`] if the review does not exist.
    pub async fn update_review(&self, id: ReviewId, patch: ReviewPatch) -> Result<Review, StaysError> {
        let mut review = self.get_review(id).await?;
        review.apply(patch);
        self.repo.update(review).await
    }

    /// # Errors
    ///
    /// Returns [`StaysError::NotFound`] if the review does not exist.
    pub async fn delete_review(&self, id: ReviewId) -> Result<(), StaysError> {
        let review = self.get_review(id).await?;
        self.repo.delete(review.id).await
    }

    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn count_reviews(&self) -> Result<u64, StaysError> {
        self.repo.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{PlaceRepository as _, UserRepository as _};
    use crate::services::memory::{InMemoryPlaces, InMemoryReviews, InMemoryUsers};
    use stays_domain::id::CityId;
    use stays_domain::place::{Place, PlaceDraft};
    use stays_domain::user::{User, UserDraft};

    struct Fixture {
        svc: ReviewService<InMemoryReviews, InMemoryPlaces, InMemoryUsers>,
        place_id: PlaceId,
        user_id: UserId,
    }

    async fn fixture() -> Fixture {
        let places = InMemoryPlaces::default();
        let users = InMemoryUsers::default();

        let user = User::from(UserDraft {
            email: "guest@example.com".to_string(),
            password: "secret".to_string(),
            first_name: None,
            last_name: None,
        });
        let user_id = user.id;
        users.create(user).await.unwrap();

        let place = Place::new(
            CityId::new(),
            user_id,
            PlaceDraft {
                name: "Beach House".to_string(),
                ..PlaceDraft::default()
            },
        );
        let place_id = place.id;
        places.create(place).await.unwrap();

        Fixture {
            svc: ReviewService::new(InMemoryReviews::default(), places, users),
            place_id,
            user_id,
        }
    }

    #[tokio::test]
    async fn should_create_review_for_existing_place_and_user() {
        let fx = fixture().await;

        let review = fx
            .svc
            .create_review(fx.place_id, fx.user_id, "Great stay")
            .await
            .unwrap();

        assert_eq!(review.place_id, fx.place_id);
        assert_eq!(review.user_id, fx.user_id);
    }

    #[tokio::test]
    async fn should_reject_review_when_user_missing() {
        let fx = fixture().await;

        let result = fx
            .svc
            .create_review(fx.place_id, UserId::new(), "Ghost review")
            .await;

        assert!(matches!(result, Err(StaysError::NotFound(_))));
        assert_eq!(fx.svc.count_reviews().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn should_reject_review_when_place_missing() {
        let fx = fixture().await;

        let result = fx
            .svc
            .create_review(PlaceId::new(), fx.user_id, "Where?")
            .await;

        assert!(matches!(result, Err(StaysError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_list_reviews_of_place() {
        let fx = fixture().await;
        fx.svc
            .create_review(fx.place_id, fx.user_id, "Great stay")
            .await
            .unwrap();
        fx.svc
            .create_review(fx.place_id, fx.user_id, "Still great")
            .await
            .unwrap();

        let reviews = fx.svc.list_reviews_of_place(fx.place_id).await.unwrap();

        assert_eq!(reviews.len(), 2);
    }

    #[tokio::test]
    async fn should_keep_parents_when_updating() {
        let fx = fixture().await;
        let review = fx
            .svc
            .create_review(fx.place_id, fx.user_id, "Great stay")
            .await
            .unwrap();

        let updated = fx
            .svc
            .update_review(
                review.id,
                ReviewPatch {
                    text: Some("Amended".to_string()),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.text, "Amended");
        assert_eq!(updated.place_id, fx.place_id);
        assert_eq!(updated.user_id, fx.user_id);
    }

    #[tokio::test]
    async fn should_delete_review() {
        let fx = fixture().await;
        let review = fx
            .svc
            .create_review(fx.place_id, fx.user_id, "Great stay")
            .await
            .unwrap();

        fx.svc.delete_review(review.id).await.unwrap();

        assert!(matches!(
            fx.svc.get_review(review.id).await,
            Err(StaysError::NotFound(_))
        ));
    }
}
