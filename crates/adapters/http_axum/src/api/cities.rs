//! JSON REST handlers for cities, including the nested
//! `/states/{id}/cities` collection.

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde_json::Value;

use stays_app::ports::{
    AmenityRepository, CityRepository, PlaceAmenityRepository, PlaceRepository, ReviewRepository,
    StateRepository, UserRepository,
};
use stays_domain::city::{City, CityPatch};
use stays_domain::id::{CityId, StateId};

use crate::error::ApiError;
use crate::state::AppState;

/// `GET /states/{id}/cities`
pub async fn list_for_state<SR, CR, AR, UR, PR, RR, LR>(
    State(app): State<AppState<SR, CR, AR, UR, PR, RR, LR>>,
    Path(state_id): Path<String>,
) -> Result<Json<Vec<City>>, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
    LR: PlaceAmenityRepository + Send + Sync + 'static,
{
    let state_id = super::parse_id::<StateId>(&state_id, "State")?;
    Ok(Json(app.city_service.list_cities_of_state(state_id).await?))
}

/// `POST /states/{id}/cities`
pub async fn create_for_state<SR, CR, AR, UR, PR, RR, LR>(
    State(app): State<AppState<SR, CR, AR, UR, PR, RR, LR>>,
    Path(state_id): Path<String>,
    body: Bytes,
) -> Result<(StatusCode, Json<City>), ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
    LR: PlaceAmenityRepository + Send + Sync + 'static,
{
    let state_id = super::parse_id::<StateId>(&state_id, "State")?;
    // parent must resolve before the body is inspected
    app.state_service.get_state(state_id).await?;
    let map = super::json_object(&body)?;
    let name = super::require_str(&map, "name")?;
    let created = app.city_service.create_city(state_id, name).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `GET /cities/{id}`
pub async fn get<SR, CR, AR, UR, PR, RR, LR>(
    State(app): State<AppState<SR, CR, AR, UR, PR, RR, LR>>,
    Path(id): Path<String>,
) -> Result<Json<City>, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
    LR: PlaceAmenityRepository + Send + Sync + 'static,
{
    let id = super::parse_id::<CityId>(&id, "City")?;
    Ok(Json(app.city_service.get_city(id).await?))
}

/// `PUT /cities/{id}`
pub async fn update<SR, CR, AR, UR, PR, RR, LR>(
    State(app): State<AppState<SR, CR, AR, UR, PR, RR, LR>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<City>, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
    LR: PlaceAmenityRepository + Send + Sync + 'static,
{
    let id = super::parse_id::<CityId>(&id, "City")?;
    app.city_service.get_city(id).await?;
    let patch: CityPatch = super::decode(super::json_object(&body)?)?;
    Ok(Json(app.city_service.update_city(id, patch).await?))
}

/// `DELETE /cities/{id}`
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
    let id = super::parse_id::<CityId>(&id, "City")?;
    app.city_service.delete_city(id).await?;
    Ok(Json(super::empty_object()))
}
