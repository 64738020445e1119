//! Handlers for the place↔amenity membership collection.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde_json::Value;

use stays_app::ports::{
    AmenityRepository, CityRepository, PlaceAmenityRepository, PlaceRepository, ReviewRepository,
    StateRepository, UserRepository,
};
use stays_app::services::place_amenity_service::Linked;
use stays_domain::amenity::Amenity;
use stays_domain::id::{AmenityId, PlaceId};

use crate::error::ApiError;
use crate::state::AppState;

/// `GET /places/{id}/amenities`
pub async fn list<SR, CR, AR, UR, PR, RR, LR>(
    State(app): State<AppState<SR, CR, AR, UR, PR, RR, LR>>,
    Path(place_id): Path<String>,
) -> Result<Json<Vec<Amenity>>, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
    LR: PlaceAmenityRepository + Send + Sync + 'static,
{
    let place_id = super::parse_id::<PlaceId>(&place_id, "Place")?;
    Ok(Json(
        app.place_amenity_service
            .list_amenities_of_place(place_id)
            .await?,
    ))
}

/// `POST /places/{place_id}/amenities/{amenity_id}`
///
/// Answers 201 when the link is new, 200 when the pair was already
/// linked; both carry the amenity record.
pub async fn link<SR, CR, AR, UR, PR, RR, LR>(
    State(app): State<AppState<SR, CR, AR, UR, PR, RR, LR>>,
    Path((place_id, amenity_id)): Path<(String, String)>,
) -> Result<(StatusCode, Json<Amenity>), ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
    LR: PlaceAmenityRepository + Send + Sync + 'static,
{
    let place_id = super::parse_id::<PlaceId>(&place_id, "Place")?;
    let amenity_id = super::parse_id::<AmenityId>(&amenity_id, "Amenity")?;
    match app.place_amenity_service.link(place_id, amenity_id).await? {
        Linked::Created(amenity) => Ok((StatusCode::CREATED, Json(amenity))),
        Linked::Existing(amenity) => Ok((StatusCode::OK, Json(amenity))),
    }
}

/// `DELETE /places/{place_id}/amenities/{amenity_id}`
pub async fn unlink<SR, CR, AR, UR, PR, RR, LR>(
    State(app): State<AppState<SR, CR, AR, UR, PR, RR, LR>>,
    Path((place_id, amenity_id)): Path<(String, String)>,
) -> Result<Json<Value>, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
    LR: PlaceAmenityRepository + Send + Sync + 'static,
{
    let place_id = super::parse_id::<PlaceId>(&place_id, "Place")?;
    let amenity_id = super::parse_id::<AmenityId>(&amenity_id, "Amenity")?;
    app.place_amenity_service
        .unlink(place_id, amenity_id)
        .await?;
    Ok(Json(super::empty_object()))
}
