//! JSON REST API handler modules and shared payload plumbing.
//!
//! Handlers take the raw body as [`Bytes`] instead of axum's `Json`
//! extractor so that every malformed-payload path produces the exact
//! legacy error shape rather than axum's own rejection body.

pub mod amenities;
pub mod cities;
pub mod index;
pub mod place_amenities;
pub mod places;
pub mod reviews;
pub mod states;
pub mod users;

use std::str::FromStr;

use axum::Router;
use axum::body::Bytes;
use axum::routing::{get, post};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use stays_app::ports::{
    AmenityRepository, CityRepository, PlaceAmenityRepository, PlaceRepository, ReviewRepository,
    StateRepository, UserRepository,
};
use stays_domain::error::{NotFoundError, ValidationError};

use crate::error::ApiError;
use crate::state::AppState;

/// Build the API sub-router.
pub fn routes<SR, CR, AR, UR, PR, RR, LR>() -> Router<AppState<SR, CR, AR, UR, PR, RR, LR>>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
    LR: PlaceAmenityRepository + Send + Sync + 'static,
{
    Router::new()
        // Service
        .route("/status", get(index::status))
        .route("/stats", get(index::stats::<SR, CR, AR, UR, PR, RR, LR>))
        // States
        .route(
            "/states",
            get(states::list::<SR, CR, AR, UR, PR, RR, LR>)
                .post(states::create::<SR, CR, AR, UR, PR, RR, LR>),
        )
        .route(
            "/states/{id}",
            get(states::get::<SR, CR, AR, UR, PR, RR, LR>)
                .put(states::update::<SR, CR, AR, UR, PR, RR, LR>)
                .delete(states::delete::<SR, CR, AR, UR, PR, RR, LR>),
        )
        // Cities
        .route(
            "/states/{id}/cities",
            get(cities::list_for_state::<SR, CR, AR, UR, PR, RR, LR>)
                .post(cities::create_for_state::<SR, CR, AR, UR, PR, RR, LR>),
        )
        .route(
            "/cities/{id}",
            get(cities::get::<SR, CR, AR, UR, PR, RR, LR>)
                .put(cities::update::<SR, CR, AR, UR, PR, RR, LR>)
                .delete(cities::delete::<SR, CR, AR, UR, PR, RR, LR>),
        )
        // Amenities
        .route(
            "/amenities",
            get(amenities::list::<SR, CR, AR, UR, PR, RR, LR>)
                .post(amenities::create::<SR, CR, AR, UR, PR, RR, LR>),
        )
        .route(
            "/amenities/{id}",
            get(amenities::get::<SR, CR, AR, UR, PR, RR, LR>)
                .put(amenities::update::<SR, CR, AR, UR, PR, RR, LR>)
                .delete(amenities::delete::<SR, CR, AR, UR, PR, RR, LR>),
        )
        // Users
        .route(
            "/users",
            get(users::list::<SR, CR, AR, UR, PR, RR, LR>)
                .post(users::create::<SR, CR, AR, UR, PR, RR, LR>),
        )
        .route(
            "/users/{id}",
            get(users::get::<SR, CR, AR, UR, PR, RR, LR>)
                .put(users::update::<SR, CR, AR, UR, PR, RR, LR>)
                .delete(users::delete::<SR, CR, AR, UR, PR, RR, LR>),
        )
        // Places
        .route(
            "/cities/{id}/places",
            get(places::list_for_city::<SR, CR, AR, UR, PR, RR, LR>)
                .post(places::create_for_city::<SR, CR, AR, UR, PR, RR, LR>),
        )
        .route(
            "/places/{id}",
            get(places::get::<SR, CR, AR, UR, PR, RR, LR>)
                .put(places::update::<SR, CR, AR, UR, PR, RR, LR>)
                .delete(places::delete::<SR, CR, AR, UR, PR, RR, LR>),
        )
        // Reviews
        .route(
            "/places/{id}/reviews",
            get(reviews::list_for_place::<SR, CR, AR, UR, PR, RR, LR>)
                .post(reviews::create_for_place::<SR, CR, AR, UR, PR, RR, LR>),
        )
        .route(
            "/reviews/{id}",
            get(reviews::get::<SR, CR, AR, UR, PR, RR, LR>)
                .put(reviews::update::<SR, CR, AR, UR, PR, RR, LR>)
                .delete(reviews::delete::<SR, CR, AR, UR, PR, RR, LR>),
        )
        // Place amenities
        .route(
            "/places/{id}/amenities",
            get(place_amenities::list::<SR, CR, AR, UR, PR, RR, LR>),
        )
        .route(
            "/places/{id}/amenities/{amenity_id}",
            post(place_amenities::link::<SR, CR, AR, UR, PR, RR, LR>)
                .delete(place_amenities::unlink::<SR, CR, AR, UR, PR, RR, LR>),
        )
}

/// Parse a request body as a JSON object. Absent, empty, unparseable,
/// and non-object bodies all read as `Not a JSON`.
pub(crate) fn json_object(body: &Bytes) -> Result<Map<String, Value>, ApiError> {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => Ok(map),
        _ => Err(ValidationError::NotJson.into()),
    }
}

/// Extract a required string field, or fail with `Missing <field>`.
pub(crate) fn require_str(map: &Map<String, Value>, field: &'static str) -> Result<String, ApiError> {
    match map.get(field) {
        Some(Value::String(value)) => Ok(value.clone()),
        Some(_) => Err(ValidationError::NotJson.into()),
        None => Err(ValidationError::MissingField(field).into()),
    }
}

/// Deserialize the validated object into a typed payload. Unknown keys
/// (including the protected `id`/`created_at`/`updated_at` and the
/// immutable parent references) are dropped by the target type; a type
/// mismatch reads as a malformed body.
pub(crate) fn decode<T: DeserializeOwned>(map: Map<String, Value>) -> Result<T, ApiError> {
    serde_json::from_value(Value::Object(map)).map_err(|_| ValidationError::NotJson.into())
}

/// Parse a path id. A string that is not a UUID cannot name any stored
/// record, so it reads as a miss rather than a client error.
pub(crate) fn parse_id<T: FromStr>(raw: &str, entity: &'static str) -> Result<T, ApiError> {
    raw.parse().map_err(|_| {
        NotFoundError {
            entity,
            id: raw.to_string(),
        }
        .into()
    })
}

/// The `{}` body answered by successful deletes.
pub(crate) fn empty_object() -> Value {
    Value::Object(Map::new())
}
