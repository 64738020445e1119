//! Place — a rentable property, owned by a user, located in a city.

use serde::{Deserialize, Serialize};

use crate::id::{CityId, PlaceId, UserId};
use crate::time::{self, Timestamp};

/// A rentable place. Numeric fields default to zero when the client
/// omits them. Amenity links live in a separate membership relation,
/// not on the record itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    pub id: PlaceId,
    /// Containing city. Resolved from the URL path, immutable afterwards.
    pub city_id: CityId,
    /// Owning user. Resolved at creation, immutable afterwards.
    pub user_id: UserId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub number_rooms: i64,
    #[serde(default)]
    pub number_bathrooms: i64,
    #[serde(default)]
    pub max_guest: i64,
    #[serde(default)]
    pub price_by_night: i64,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Place {
    /// Construct a place from a draft plus the resolved parent references.
    #[must_use]
    pub fn new(city_id: CityId, user_id: UserId, draft: PlaceDraft) -> Self {
        let ts = time::now();
        Self {
            id: PlaceId::new(),
            city_id,
            user_id,
            name: draft.name,
            description: draft.description,
            number_rooms: draft.number_rooms,
            number_bathrooms: draft.number_bathrooms,
            max_guest: draft.max_guest,
            price_by_night: draft.price_by_night,
            latitude: draft.latitude,
            longitude: draft.longitude,
            created_at: ts,
            updated_at: ts,
        }
    }

    /// Record a mutation by bumping `updated_at`.
    pub fn touch(&mut self) {
        self.updated_at = time::now();
    }

    /// Apply a partial update. `city_id` and `user_id` are not part of
    /// the allow-list.
    pub fn apply(&mut self, patch: PlacePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(number_rooms) = patch.number_rooms {
            self.number_rooms = number_rooms;
        }
        if let Some(number_bathrooms) = patch.number_bathrooms {
            self.number_bathrooms = number_bathrooms;
        }
        if let Some(max_guest) = patch.max_guest {
            self.max_guest = max_guest;
        }
        if let Some(price_by_night) = patch.price_by_night {
            self.price_by_night = price_by_night;
        }
        if let Some(latitude) = patch.latitude {
            self.latitude = latitude;
        }
        if let Some(longitude) = patch.longitude {
            self.longitude = longitude;
        }
        self.touch();
    }
}

/// Client-supplied fields for creating a [`Place`]. The parent `city_id`
/// comes from the URL and `user_id` is resolved separately, so neither
/// appears here.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PlaceDraft {
    pub name: String,
    pub description: String,
    pub number_rooms: i64,
    pub number_bathrooms: i64,
    pub max_guest: i64,
    pub price_by_night: i64,
    pub latitude: f64,
    pub longitude: f64,
}

/// Updatable fields of a [`Place`].
#[derive(Debug, Default, Deserialize)]
pub struct PlacePatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub number_rooms: Option<i64>,
    pub number_bathrooms: Option<i64>,
    pub max_guest: Option<i64>,
    pub price_by_night: Option<i64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}
