//! Service-level endpoints: liveness and record counts.

use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};

use stays_app::ports::{
    AmenityRepository, CityRepository, PlaceAmenityRepository, PlaceRepository, ReviewRepository,
    StateRepository, UserRepository,
};

use crate::error::ApiError;
use crate::state::AppState;

/// `GET /status`
pub async fn status() -> Json<Value> {
    Json(json!({ "status": "OK" }))
}

/// `GET /stats` — one count per entity type, keyed by the collection
/// name.
pub async fn stats<SR, CR, AR, UR, PR, RR, LR>(
    State(app): State<AppState<SR, CR, AR, UR, PR, RR, LR>>,
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
    Ok(Json(json!({
        "amenities": app.amenity_service.count_amenities().await?,
        "cities": app.city_service.count_cities().await?,
        "places": app.place_service.count_places().await?,
        "reviews": app.review_service.count_reviews().await?,
        "states": app.state_service.count_states().await?,
        "users": app.user_service.count_users().await?,
    })))
}

/// `GET /health`
pub async fn health() -> &'static str {
    "OK"
}
