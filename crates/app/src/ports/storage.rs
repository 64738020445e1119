//! Storage ports — repository traits for persistence.
//!
//! Every mutating method commits before resolving, so a returned `Ok`
//! means the change is durable as far as the backend guarantees. Each
//! repository also exposes `count` for the `/stats` endpoint.

use std::future::Future;

use stays_domain::amenity::Amenity;
use stays_domain::city::City;
use stays_domain::error::StaysError;
use stays_domain::id::{AmenityId, CityId, PlaceId, ReviewId, StateId, UserId};
use stays_domain::place::Place;
use stays_domain::review::Review;
use stays_domain::state::State;
use stays_domain::user::User;

/// Persistence for [`State`] records.
pub trait StateRepository {
    fn create(&self, state: State) -> impl Future<Output = Result<State, StaysError>> + Send;
    fn get_by_id(
        &self,
        id: StateId,
    ) -> impl Future<Output = Result<Option<State>, StaysError>> + Send;
    fn get_all(&self) -> impl Future<Output = Result<Vec<State>, StaysError>> + Send;
    fn update(&self, state: State) -> impl Future<Output = Result<State, StaysError>> + Send;
    fn delete(&self, id: StateId) -> impl Future<Output = Result<(), StaysError>> + Send;
    fn count(&self) -> impl Future<Output = Result<u64, StaysError>> + Send;
}

/// Persistence for [`City`] records.
pub trait CityRepository {
    fn create(&self, city: City) -> impl Future<Output = Result<City, StaysError>> + Send;
    fn get_by_id(
        &self,
        id: CityId,
    ) -> impl Future<Output = Result<Option<City>, StaysError>> + Send;
    fn get_all(&self) -> impl Future<Output = Result<Vec<City>, StaysError>> + Send;
    /// Cities belonging to the given state, in storage iteration order.
    fn find_by_state(
        &self,
        state_id: StateId,
    ) -> impl Future<Output = Result<Vec<City>, StaysError>> + Send;
    fn update(&self, city: City) -> impl Future<Output = Result<City, StaysError>> + Send;
    fn delete(&self, id: CityId) -> impl Future<Output = Result<(), StaysError>> + Send;
    fn count(&self) -> impl Future<Output = Result<u64, StaysError>> + Send;
}

/// Persistence for [`Amenity`] records.
pub trait AmenityRepository {
    fn create(&self, amenity: Amenity)
    -> impl Future<Output = Result<Amenity, StaysError>> + Send;
    fn get_by_id(
        &self,
        id: AmenityId,
    ) -> impl Future<Output = Result<Option<Amenity>, StaysError>> + Send;
    fn get_all(&self) -> impl Future<Output = Result<Vec<Amenity>, StaysError>> + Send;
    fn update(&self, amenity: Amenity)
    -> impl Future<Output = Result<Amenity, StaysError>> + Send;
    fn delete(&self, id: AmenityId) -> impl Future<Output = Result<(), StaysError>> + Send;
    fn count(&self) -> impl Future<Output = Result<u64, StaysError>> + Send;
}

/// Persistence for [`User`] records.
pub trait UserRepository {
    fn create(&self, user: User) -> impl Future<Output = Result<User, StaysError>> + Send;
    fn get_by_id(
        &self,
        id: UserId,
    ) -> impl Future<Output = Result<Option<User>, StaysError>> + Send;
    fn get_all(&self) -> impl Future<Output = Result<Vec<User>, StaysError>> + Send;
    fn update(&self, user: User) -> impl Future<Output = Result<User, StaysError>> + Send;
    fn delete(&self, id: UserId) -> impl Future<Output = Result<(), StaysError>> + Send;
    fn count(&self) -> impl Future<Output = Result<u64, StaysError>> + Send;
}

/// Persistence for [`Place`] records.
pub trait PlaceRepository {
    fn create(&self, place: Place) -> impl Future<Output = Result<Place, StaysError>> + Send;
    fn get_by_id(
        &self,
        id: PlaceId,
    ) -> impl Future<Output = Result<Option<Place>, StaysError>> + Send;
    fn get_all(&self) -> impl Future<Output = Result<Vec<Place>, StaysError>> + Send;
    /// Places belonging to the given city, in storage iteration order.
    fn find_by_city(
        &self,
        city_id: CityId,
    ) -> impl Future<Output = Result<Vec<Place>, StaysError>> + Send;
    fn update(&self, place: Place) -> impl Future<Output = Result<Place, StaysError>> + Send;
    fn delete(&self, id: PlaceId) -> impl Future<Output = Result<(), StaysError>> + Send;
    fn count(&self) -> impl Future<Output = Result<u64, StaysError>> + Send;
}

/// Persistence for [`Review`] records.
pub trait ReviewRepository {
    fn create(&self, review: Review) -> impl Future<Output = Result<Review, StaysError>> + Send;
    fn get_by_id(
        &self,
        id: ReviewId,
    ) -> impl Future<Output = Result<Option<Review>, StaysError>> + Send;
    fn get_all(&self) -> impl Future<Output = Result<Vec<Review>, StaysError>> + Send;
    /// Reviews of the given place, in storage iteration order.
    fn find_by_place(
        &self,
        place_id: PlaceId,
    ) -> impl Future<Output = Result<Vec<Review>, StaysError>> + Send;
    fn update(&self, review: Review) -> impl Future<Output = Result<Review, StaysError>> + Send;
    fn delete(&self, id: ReviewId) -> impl Future<Output = Result<(), StaysError>> + Send;
    fn count(&self) -> impl Future<Output = Result<u64, StaysError>> + Send;
}

/// The place↔amenity membership collection.
///
/// Backends represent the relation differently (join table vs. an
/// embedded id list); callers only ever see contains/add/remove/list.
pub trait PlaceAmenityRepository {
    fn contains(
        &self,
        place_id: PlaceId,
        amenity_id: AmenityId,
    ) -> impl Future<Output = Result<bool, StaysError>> + Send;
    /// Add the pair to the relation and commit. Adding an existing pair
    /// is the caller's responsibility to avoid.
    fn add(
        &self,
        place_id: PlaceId,
        amenity_id: AmenityId,
    ) -> impl Future<Output = Result<(), StaysError>> + Send;
    /// Remove the pair from the relation and commit.
    fn remove(
        &self,
        place_id: PlaceId,
        amenity_id: AmenityId,
    ) -> impl Future<Output = Result<(), StaysError>> + Send;
    /// Full amenity records currently linked to the place.
    fn list(
        &self,
        place_id: PlaceId,
    ) -> impl Future<Output = Result<Vec<Amenity>, StaysError>> + Send;
}
