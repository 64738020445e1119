//! JSON REST handlers for amenities.

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde_json::Value;

use stays_app::ports::{
    AmenityRepository, CityRepository, PlaceAmenityRepository, PlaceRepository, ReviewRepository,
    StateRepository, UserRepository,
};
use stays_domain::amenity::{Amenity, AmenityPatch};
use stays_domain::id::AmenityId;

use crate::error::ApiError;
use crate::state::AppState;

/// `GET /amenities`
pub async fn list<SR, CR, AR, UR, PR, RR, LR>(
    State(app): State<AppState<SR, CR, AR, UR, PR, RR, LR>>,
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
    Ok(Json(app.amenity_service.list_amenities().await?))
}

/// `GET /amenities/{id}`
pub async fn get<SR, CR, AR, UR, PR, RR, LR>(
    State(app): State<AppState<SR, CR, AR, UR, PR, RR, LR>>,
    Path(id): Path<String>,
) -> Result<Json<Amenity>, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
    LR: PlaceAmenityRepository + Send + Sync + 'static,
{
    let id = super::parse_id::<AmenityId>(&id, "Amenity")?;
    Ok(Json(app.amenity_service.get_amenity(id).await?))
}

/// `POST /amenities`
pub async fn create<SR, CR, AR, UR, PR, RR, LR>(
    State(app): State<AppState<SR, CR, AR, UR, PR, RR, LR>>,
    body: Bytes,
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
    let map = super::json_object(&body)?;
    let name = super::require_str(&map, "name")?;
    let created = app.amenity_service.create_amenity(Amenity::new(name)).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `PUT /amenities/{id}`
pub async fn update<SR, CR, AR, UR, PR, RR, LR>(
    State(app): State<AppState<SR, CR, AR, UR, PR, RR, LR>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Amenity>, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
    LR: PlaceAmenityRepository + Send + Sync + 'static,
{
    let id = super::parse_id::<AmenityId>(&id, "Amenity")?;
    app.amenity_service.get_amenity(id).await?;
    let patch: AmenityPatch = super::decode(super::json_object(&body)?)?;
    Ok(Json(app.amenity_service.update_amenity(id, patch).await?))
}

/// `DELETE /amenities/{id}`
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
    let id = super::parse_id::<AmenityId>(&id, "Amenity")?;
    app.amenity_service.delete_amenity(id).await?;
    Ok(Json(super::empty_object()))
}
