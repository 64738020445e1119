//! Repository implementations over the shared [`JsonStore`].
//!
//! Every repository holds an `Arc` to the same store; a mutation updates
//! the in-memory index and rewrites the file before returning.

use std::sync::Arc;

use stays_app::ports::{
    AmenityRepository, CityRepository, PlaceAmenityRepository, PlaceRepository, ReviewRepository,
    StateRepository, UserRepository,
};
use stays_domain::amenity::Amenity;
use stays_domain::city::City;
use stays_domain::error::StaysError;
use stays_domain::id::{AmenityId, CityId, PlaceId, ReviewId, StateId, UserId};
use stays_domain::place::Place;
use stays_domain::review::Review;
use stays_domain::state::State;
use stays_domain::user::User;

use crate::store::JsonStore;

macro_rules! json_repo {
    ($(#[$meta:meta])* $trait:ident for $repo:ident { $field:ident, $id:ty, $record:ty } $($extra:item)*) => {
        $(#[$meta])*
        pub struct $repo {
            store: Arc<JsonStore>,
        }

        impl $repo {
            /// Create a new repository over the shared store.
            #[must_use]
            pub fn new(store: Arc<JsonStore>) -> Self {
                Self { store }
            }
        }

        impl $trait for $repo {
            async fn create(&self, record: $record) -> Result<$record, StaysError> {
                let mut index = self.store.lock();
                index.$field.insert(record.id, record.clone());
                self.store.commit(&index)?;
                Ok(record)
            }

            async fn get_by_id(&self, id: $id) -> Result<Option<$record>, StaysError> {
                Ok(self.store.lock().$field.get(&id).cloned())
            }

            async fn get_all(&self) -> Result<Vec<$record>, StaysError> {
                Ok(self.store.lock().$field.values().cloned().collect())
            }

            async fn update(&self, record: $record) -> Result<$record, StaysError> {
                let mut index = self.store.lock();
                index.$field.insert(record.id, record.clone());
                self.store.commit(&index)?;
                Ok(record)
            }

            async fn delete(&self, id: $id) -> Result<(), StaysError> {
                let mut index = self.store.lock();
                index.$field.remove(&id);
                self.store.commit(&index)?;
                Ok(())
            }

            async fn count(&self) -> Result<u64, StaysError> {
                Ok(self.store.lock().$field.len() as u64)
            }

            $($extra)*
        }
    };
}

json_repo!(
    /// File-backed state repository.
    StateRepository for JsonStateRepository { states, StateId, State }
);

json_repo!(
    /// File-backed city repository.
    CityRepository for JsonCityRepository { cities, CityId, City }
    async fn find_by_state(&self, state_id: StateId) -> Result<Vec<City>, StaysError> {
        Ok(self
            .store
            .lock()
            .cities
            .values()
            .filter(|city| city.state_id == state_id)
            .cloned()
            .collect())
    }
);

json_repo!(
    /// File-backed amenity repository.
    AmenityRepository for JsonAmenityRepository { amenities, AmenityId, Amenity }
);

json_repo!(
    /// File-backed user repository.
    UserRepository for JsonUserRepository { users, UserId, User }
);

json_repo!(
    /// File-backed place repository.
    PlaceRepository for JsonPlaceRepository { places, PlaceId, Place }
    async fn find_by_city(&self, city_id: CityId) -> Result<Vec<Place>, StaysError> {
        Ok(self
            .store
            .lock()
            .places
            .values()
            .filter(|place| place.city_id == city_id)
            .cloned()
            .collect())
    }
);

json_repo!(
    /// File-backed review repository.
    ReviewRepository for JsonReviewRepository { reviews, ReviewId, Review }
    async fn find_by_place(&self, place_id: PlaceId) -> Result<Vec<Review>, StaysError> {
        Ok(self
            .store
            .lock()
            .reviews
            .values()
            .filter(|review| review.place_id == place_id)
            .cloned()
            .collect())
    }
);

/// File-backed place↔amenity membership, stored as an id list per place.
pub struct JsonPlaceAmenityRepository {
    store: Arc<JsonStore>,
}

impl JsonPlaceAmenityRepository {
    /// Create a new repository over the shared store.
    #[must_use]
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }
}

impl PlaceAmenityRepository for JsonPlaceAmenityRepository {
    async fn contains(&self, place_id: PlaceId, amenity_id: AmenityId) -> Result<bool, StaysError> {
        Ok(self
            .store
            .lock()
            .place_amenities
            .get(&place_id)
            .is_some_and(|linked| linked.contains(&amenity_id)))
    }

    async fn add(&self, place_id: PlaceId, amenity_id: AmenityId) -> Result<(), StaysError> {
        let mut index = self.store.lock();
        index
            .place_amenities
            .entry(place_id)
            .or_default()
            .push(amenity_id);
        self.store.commit(&index)?;
        Ok(())
    }

    async fn remove(&self, place_id: PlaceId, amenity_id: AmenityId) -> Result<(), StaysError> {
        let mut index = self.store.lock();
        if let Some(linked) = index.place_amenities.get_mut(&place_id) {
            linked.retain(|id| *id != amenity_id);
        }
        self.store.commit(&index)?;
        Ok(())
    }

    async fn list(&self, place_id: PlaceId) -> Result<Vec<Amenity>, StaysError> {
        let index = self.store.lock();
        let Some(linked) = index.place_amenities.get(&place_id) else {
            return Ok(Vec::new());
        };
        Ok(linked
            .iter()
            .filter_map(|id| index.amenities.get(id).cloned())
            .collect())
    }
}
