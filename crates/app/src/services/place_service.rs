//! Place service — use-cases for managing places within a city.

use stays_domain::error::{NotFoundError, StaysError};
use stays_domain::id::{CityId, PlaceId, UserId};
use stays_domain::place::{Place, PlaceDraft, PlacePatch};

use crate::ports::{CityRepository, PlaceRepository, UserRepository};

/// Application service for place CRUD operations.
///
/// Creation resolves two parents: the containing city (from the URL) and
/// the owning user (from the payload). Either miss is a `NotFound`, and
/// nothing is persisted in that case.
pub struct PlaceService<R, C, U> {
    repo: R,
    cities: C,
    users: U,
}

impl<R, C, U> PlaceService<R, C, U>
where
    R: PlaceRepository,
    C: CityRepository,
    U: UserRepository,
{
    /// Create a new service backed by the given repositories.
    pub fn new(repo: R, cities: C, users: U) -> Self {
        Self { repo, cities, users }
    }

    async fn resolve_city(&self, city_id: CityId) -> Result<(), StaysError> {
        self.cities
            .get_by_id(city_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| {
                NotFoundError {
                    entity: "City",
                    id: city_id.to_string(),
                }
                .into()
            })
    }

    async fn resolve_user(&self, user_id: UserId) -> Result<(), StaysError> {
        self.users
            .get_by_id(user_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| {
                NotFoundError {
                    entity: "User",
                    id: user_id.to_string(),
                }
                .into()
            })
    }

    /// Create a place under an existing city, owned by an existing user.
    ///
    /// # Errors
    ///
    /// Returns [`StaysError::NotFound`] when the city or the user does
    /// not exist, or a storage error from the repository.
    pub async fn create_place(
        &self,
        city_id: CityId,
        user_id: UserId,
        draft: PlaceDraft,
    ) -> Result<Place, StaysError> {
        self.resolve_city(city_id).await?;
        self.resolve_user(user_id).await?;
        let place = Place::new(city_id, user_id, draft);
        tracing::debug!(id = %place.id, city_id = %city_id, "creating place");
        self.repo.create(place).await
    }

    /// # Errors
    ///
    /// Returns [`StaysError::NotFound`] when no place with `id` exists.
    pub async fn get_place(&self, id: PlaceId) -> Result<Place, StaysError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Place",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List the places of an existing city.
    ///
    /// # Errors
    ///
    /// Returns [`StaysError::NotFound`] when the city does not exist.
    pub async fn list_places_of_city(&self, city_id: CityId) -> Result<Vec<Place>, StaysError> {
        self.resolve_city(city_id).await?;
        self.repo.find_by_city(city_id).await
    }

    /// # Errors
    ///
    /// Returns [`StaysError::NotFound`] if the place does not exist.
    pub async fn update_place(&self, id: PlaceId, patch: PlacePatch) -> Result<Place, StaysError> {
        let mut place = self.get_place(id).await?;
        place.apply(patch);
        self.repo.update(place).await
    }

    /// # Errors
    ///
    /// Returns [`StaysError::NotFound`] if the place does not exist.
    pub async fn delete_place(&self, id: PlaceId) -> Result<(), StaysError> {
        let place = self.get_place(id).await?;
        self.repo.delete(place.id).await
    }

    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn count_places(&self) -> Result<u64, StaysError> {
        self.repo.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{CityRepository as _, StateRepository as _, UserRepository as _};
    use crate::services::memory::{InMemoryCities, InMemoryPlaces, InMemoryStates, InMemoryUsers};
    use stays_domain::city::City;
    use stays_domain::state::State;
    use stays_domain::user::{User, UserDraft};

    struct Fixture {
        svc: PlaceService<InMemoryPlaces, InMemoryCities, InMemoryUsers>,
        city_id: CityId,
        user_id: UserId,
    }

    async fn fixture() -> Fixture {
        let states = InMemoryStates::default();
        let cities = InMemoryCities::default();
        let users = InMemoryUsers::default();

        let state = State::new("California");
        let city = City::new("San Francisco", state.id);
        let city_id = city.id;
        states.create(state).await.unwrap();
        cities.create(city).await.unwrap();

        let user = User::from(UserDraft {
            email: "owner@example.com".to_string(),
            password: "secret".to_string(),
            first_name: None,
            last_name: None,
        });
        let user_id = user.id;
        users.create(user).await.unwrap();

        Fixture {
            svc: PlaceService::new(InMemoryPlaces::default(), cities, users),
            city_id,
            user_id,
        }
    }

    fn draft(name: &str) -> PlaceDraft {
        PlaceDraft {
            name: name.to_string(),
            price_by_night: 150,
            ..PlaceDraft::default()
        }
    }

    #[tokio::test]
    async fn should_create_place_with_resolved_parents() {
        let fx = fixture().await;

        let place = fx
            .svc
            .create_place(fx.city_id, fx.user_id, draft("Beach House"))
            .await
            .unwrap();

        assert_eq!(place.city_id, fx.city_id);
        assert_eq!(place.user_id, fx.user_id);
        assert_eq!(place.price_by_night, 150);
    }

    #[tokio::test]
    async fn should_reject_place_when_user_missing() {
        let fx = fixture().await;

        let result = fx
            .svc
            .create_place(fx.city_id, UserId::new(), draft("Orphan"))
            .await;

        assert!(matches!(result, Err(StaysError::NotFound(_))));
        // nothing persisted
        assert_eq!(fx.svc.count_places().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn should_reject_place_when_city_missing() {
        let fx = fixture().await;

        let result = fx
            .svc
            .create_place(CityId::new(), fx.user_id, draft("Orphan"))
            .await;

        assert!(matches!(result, Err(StaysError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_list_places_of_city() {
        let fx = fixture().await;
        fx.svc
            .create_place(fx.city_id, fx.user_id, draft("Beach House"))
            .await
            .unwrap();
        fx.svc
            .create_place(fx.city_id, fx.user_id, draft("Loft"))
            .await
            .unwrap();

        let places = fx.svc.list_places_of_city(fx.city_id).await.unwrap();

        assert_eq!(places.len(), 2);
    }

    #[tokio::test]
    async fn should_keep_owner_when_updating() {
        let fx = fixture().await;
        let place = fx
            .svc
            .create_place(fx.city_id, fx.user_id, draft("Beach House"))
            .await
            .unwrap();

        let updated = fx
            .svc
            .update_place(
                place.id,
                PlacePatch {
                    max_guest: Some(6),
                    ..PlacePatch::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.max_guest, 6);
        assert_eq!(updated.user_id, fx.user_id);
        assert_eq!(updated.name, "Beach House");
    }

    #[tokio::test]
    async fn should_delete_place() {
        let fx = fixture().await;
        let place = fx
            .svc
            .create_place(fx.city_id, fx.user_id, draft("Beach House"))
            .await
            .unwrap();

        fx.svc.delete_place(place.id).await.unwrap();

        assert!(matches!(
            fx.svc.get_place(place.id).await,
            Err(StaysError::NotFound(_))
        ));
    }
}
