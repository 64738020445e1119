//! JSON REST handlers for places, including the nested
//! `/cities/{id}/places` collection.

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde_json::Value;

use stays_app::ports::{
    AmenityRepository, CityRepository, PlaceAmenityRepository, PlaceRepository, ReviewRepository,
    StateRepository, UserRepository,
};
use stays_domain::id::{CityId, PlaceId, UserId};
use stays_domain::place::{Place, PlaceDraft, PlacePatch};

use crate::error::ApiError;
use crate::state::AppState;

/// `GET /cities/{id}/places`
pub async fn list_for_city<SR, CR, AR, UR, PR, RR, LR>(
    State(app): State<AppState<SR, CR, AR, UR, PR, RR, LR>>,
    Path(city_id): Path<String>,
) -> Result<Json<Vec<Place>>, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
    LR: PlaceAmenityRepository + Send + Sync + 'static,
{
    let city_id = super::parse_id::<CityId>(&city_id, "City")?;
    Ok(Json(app.place_service.list_places_of_city(city_id).await?))
}

/// `POST /cities/{id}/places`
///
/// Check order matters and mirrors the legacy API: unknown city → 404,
/// bad body → 400, missing `user_id`/`name` → 400, unknown user → 404.
pub async fn create_for_city<SR, CR, AR, UR, PR, RR, LR>(
    State(app): State<AppState<SR, CR, AR, UR, PR, RR, LR>>,
    Path(city_id): Path<String>,
    body: Bytes,
) -> Result<(StatusCode, Json<Place>), ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
    LR: PlaceAmenityRepository + Send + Sync + 'static,
{
    let city_id = super::parse_id::<CityId>(&city_id, "City")?;
    app.city_service.get_city(city_id).await?;
    let map = super::json_object(&body)?;
    let user_id = super::require_str(&map, "user_id")?;
    super::require_str(&map, "name")?;
    let user_id = super::parse_id::<UserId>(&user_id, "User")?;
    let draft: PlaceDraft = super::decode(map)?;
    let created = app.place_service.create_place(city_id, user_id, draft).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `GET /places/{id}`
pub async fn get<SR, CR, AR, UR, PR, RR, LR>(
    State(app): State<AppState<SR, CR, AR, UR, PR, RR, LR>>,
    Path(id): Path<String>,
) -> Result<Json<Place>, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
    LR: PlaceAmenityRepository + Send + Sync + 'static,
{
    let id = super::parse_id::<PlaceId>(&id, "Place")?;
    Ok(Json(app.place_service.get_place(id).await?))
}

/// `PUT /places/{id}`
pub async fn update<SR, CR, AR, UR, PR, RR, LR>(
    State(app): State<AppState<SR, CR, AR, UR, PR, RR, LR>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Place>, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
    LR: PlaceAmenityRepository + Send + Sync + 'static,
{
    let id = super::parse_id::<PlaceId>(&id, "Place")?;
    app.place_service.get_place(id).await?;
    let patch: PlacePatch = super::decode(super::json_object(&body)?)?;
    Ok(Json(app.place_service.update_place(id, patch).await?))
}

/// `DELETE /places/{id}`
pub async fn delete<SR, CR, AR, UR, PR, RR, LR>(
    State(app): State<AppState<SR, CR, AR, UR, PR, RR, LR>>,
    Path(id): Path<String>,
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
    let id = super::parse_id::<PlaceId>(&id, "Place")?;
    app.place_service.delete_place(id).await?;
    Ok(Json(super::empty_object()))
}
