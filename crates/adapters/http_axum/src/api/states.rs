//! JSON REST handlers for states.

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde_json::Value;

use stays_app::ports::{
    AmenityRepository, CityRepository, PlaceAmenityRepository, PlaceRepository, ReviewRepository,
    StateRepository, UserRepository,
};
use stays_domain::id::StateId;
use stays_domain::state::{State as StateRecord, StatePatch};

use crate::error::ApiError;
use crate::state::AppState;

/// `GET /states`
pub async fn list<SR, CR, AR, UR, PR, RR, LR>(
    State(app): State<AppState<SR, CR, AR, UR, PR, RR, LR>>,
) -> Result<Json<Vec<StateRecord>>, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
    LR: PlaceAmenityRepository + Send + Sync + 'static,
{
    Ok(Json(app.state_service.list_states().await?))
}

/// `GET /states/{id}`
pub async fn get<SR, CR, AR, UR, PR, RR, LR>(
    State(app): State<AppState<SR, CR, AR, UR, PR, RR, LR>>,
    Path(id): Path<String>,
) -> Result<Json<StateRecord>, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
    LR: PlaceAmenityRepository + Send + Sync + 'static,
{
    let id = super::parse_id::<StateId>(&id, "State")?;
    Ok(Json(app.state_service.get_state(id).await?))
}

/// `POST /states`
pub async fn create<SR, CR, AR, UR, PR, RR, LR>(
    State(app): State<AppState<SR, CR, AR, UR, PR, RR, LR>>,
    body: Bytes,
) -> Result<(StatusCode, Json<StateRecord>), ApiError>
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
    let created = app.state_service.create_state(StateRecord::new(name)).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `PUT /states/{id}`
pub async fn update<SR, CR, AR, UR, PR, RR, LR>(
    State(app): State<AppState<SR, CR, AR, UR, PR, RR, LR>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<StateRecord>, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
    LR: PlaceAmenityRepository + Send + Sync + 'static,
{
    let id = super::parse_id::<StateId>(&id, "State")?;
    // resolve before body validation, matching the legacy check order
    app.state_service.get_state(id).await?;
    let patch: StatePatch = super::decode(super::json_object(&body)?)?;
    Ok(Json(app.state_service.update_state(id, patch).await?))
}

/// `DELETE /states/{id}`
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
    let id = super::parse_id::<StateId>(&id, "State")?;
    app.state_service.delete_state(id).await?;
    Ok(Json(super::empty_object()))
}
