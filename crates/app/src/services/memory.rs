//! In-memory repository fakes shared by the service tests.
//!
//! Each fake wraps its map in `Arc<Mutex<…>>` so a single instance can be
//! handed to several services in one test.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex};

use stays_domain::amenity::Amenity;
use stays_domain::city::City;
use stays_domain::error::StaysError;
use stays_domain::id::{AmenityId, CityId, PlaceId, ReviewId, StateId, UserId};
use stays_domain::place::Place;
use stays_domain::review::Review;
use stays_domain::state::State;
use stays_domain::user::User;

use crate::ports::{
    AmenityRepository, CityRepository, PlaceAmenityRepository, PlaceRepository, ReviewRepository,
    StateRepository, UserRepository,
};

macro_rules! crud_impl {
    ($trait:ident for $fake:ident { $id:ty, $record:ty } $($extra:item)*) => {
        impl $trait for $fake {
            fn create(
                &self,
                record: $record,
            ) -> impl Future<Output = Result<$record, StaysError>> + Send {
                self.store.lock().unwrap().insert(record.id, record.clone());
                async move { Ok(record) }
            }

            fn get_by_id(
                &self,
                id: $id,
            ) -> impl Future<Output = Result<Option<$record>, StaysError>> + Send {
                let result = self.store.lock().unwrap().get(&id).cloned();
                async move { Ok(result) }
            }

            fn get_all(&self) -> impl Future<Output = Result<Vec<$record>, StaysError>> + Send {
                let result: Vec<$record> = self.store.lock().unwrap().values().cloned().collect();
                async move { Ok(result) }
            }

            fn update(
                &self,
                record: $record,
            ) -> impl Future<Output = Result<$record, StaysError>> + Send {
                self.store.lock().unwrap().insert(record.id, record.clone());
                async move { Ok(record) }
            }

            fn delete(&self, id: $id) -> impl Future<Output = Result<(), StaysError>> + Send {
                self.store.lock().unwrap().remove(&id);
                async move { Ok(()) }
            }

            fn count(&self) -> impl Future<Output = Result<u64, StaysError>> + Send {
                let result = self.store.lock().unwrap().len() as u64;
                async move { Ok(result) }
            }

            $($extra)*
        }
    };
}

#[derive(Clone, Default)]
pub struct InMemoryStates {
    store: Arc<Mutex<HashMap<StateId, State>>>,
}

crud_impl!(StateRepository for InMemoryStates { StateId, State });

#[derive(Clone, Default)]
pub struct InMemoryCities {
    store: Arc<Mutex<HashMap<CityId, City>>>,
}

crud_impl!(CityRepository for InMemoryCities { CityId, City }
    fn find_by_state(
        &self,
        state_id: StateId,
    ) -> impl Future<Output = Result<Vec<City>, StaysError>> + Send {
        let result: Vec<City> = self
            .store
            .lock()
            .unwrap()
            .values()
            .filter(|city| city.state_id == state_id)
            .cloned()
            .collect();
        async move { Ok(result) }
    }
);

#[derive(Clone, Default)]
pub struct InMemoryAmenities {
    store: Arc<Mutex<HashMap<AmenityId, Amenity>>>,
}

crud_impl!(AmenityRepository for InMemoryAmenities { AmenityId, Amenity });

#[derive(Clone, Default)]
pub struct InMemoryUsers {
    store: Arc<Mutex<HashMap<UserId, User>>>,
}

crud_impl!(UserRepository for InMemoryUsers { UserId, User });

#[derive(Clone, Default)]
pub struct InMemoryPlaces {
    store: Arc<Mutex<HashMap<PlaceId, Place>>>,
}

crud_impl!(PlaceRepository for InMemoryPlaces { PlaceId, Place }
    fn find_by_city(
        &self,
        city_id: CityId,
    ) -> impl Future<Output = Result<Vec<Place>, StaysError>> + Send {
        let result: Vec<Place> = self
            .store
            .lock()
            .unwrap()
            .values()
            .filter(|place| place.city_id == city_id)
            .cloned()
            .collect();
        async move { Ok(result) }
    }
);

#[derive(Clone, Default)]
pub struct InMemoryReviews {
    store: Arc<Mutex<HashMap<ReviewId, Review>>>,
}

crud_impl!(ReviewRepository for InMemoryReviews { ReviewId, Review }
    fn find_by_place(
        &self,
        place_id: PlaceId,
    ) -> impl Future<Output = Result<Vec<Review>, StaysError>> + Send {
        let result: Vec<Review> = self
            .store
            .lock()
            .unwrap()
            .values()
            .filter(|review| review.place_id == place_id)
            .cloned()
            .collect();
        async move { Ok(result) }
    }
);

/// Membership fake backed by a pair list plus the amenity fake it
/// resolves records from.
#[derive(Clone)]
pub struct InMemoryLinks {
    pairs: Arc<Mutex<Vec<(PlaceId, AmenityId)>>>,
    amenities: InMemoryAmenities,
}

impl InMemoryLinks {
    pub fn new(amenities: InMemoryAmenities) -> Self {
        Self {
            pairs: Arc::default(),
            amenities,
        }
    }
}

impl PlaceAmenityRepository for InMemoryLinks {
    fn contains(
        &self,
        place_id: PlaceId,
        amenity_id: AmenityId,
    ) -> impl Future<Output = Result<bool, StaysError>> + Send {
        let result = self
            .pairs
            .lock()
            .unwrap()
            .contains(&(place_id, amenity_id));
        async move { Ok(result) }
    }

    fn add(
        &self,
        place_id: PlaceId,
        amenity_id: AmenityId,
    ) -> impl Future<Output = Result<(), StaysError>> + Send {
        self.pairs.lock().unwrap().push((place_id, amenity_id));
        async move { Ok(()) }
    }

    fn remove(
        &self,
        place_id: PlaceId,
        amenity_id: AmenityId,
    ) -> impl Future<Output = Result<(), StaysError>> + Send {
        self.pairs
            .lock()
            .unwrap()
            .retain(|pair| *pair != (place_id, amenity_id));
        async move { Ok(()) }
    }

    fn list(
        &self,
        place_id: PlaceId,
    ) -> impl Future<Output = Result<Vec<Amenity>, StaysError>> + Send {
        let ids: Vec<AmenityId> = self
            .pairs
            .lock()
            .unwrap()
            .iter()
            .filter(|(pid, _)| *pid == place_id)
            .map(|(_, aid)| *aid)
            .collect();
        let store = self.amenities.store.lock().unwrap();
        let result: Vec<Amenity> = ids.iter().filter_map(|id| store.get(id).cloned()).collect();
        drop(store);
        async move { Ok(result) }
    }
}
