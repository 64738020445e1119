//! JSON REST handlers for reviews, including the nested
//! `/places/{id}/reviews` collection.

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde_json::Value;

use stays_app::ports::{
    AmenityRepository, CityRepository, PlaceAmenityRepository, PlaceRepository, ReviewRepository,
    StateRepository, UserRepository,
};
use stays_domain::id::{PlaceId, ReviewId, UserId};
use stays_domain::review::{Review, ReviewPatch};

use crate::error::ApiError;
use crate::state::AppState;

/// `GET /places/{id}/reviews`
pub async fn list_for_place<SR, CR, AR, UR, PR, RR, LR>(
    State(app): State<AppState<SR, CR, AR, UR, PR, RR, LR>>,
    Path(place_id): Path<String>,
) -> Result<Json<Vec<Review>>, ApiError>
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
        app.review_service.list_reviews_of_place(place_id).await?,
    ))
}

/// `POST /places/{id}/reviews`
pub async fn create_for_place<SR, CR, AR, UR, PR, RR, LR>(
    State(app): State<AppState<SR, CR, AR, UR, PR, RR, LR>>,
    Path(place_id): Path<String>,
    body: Bytes,
) -> Result<(StatusCode, Json<Review>), ApiError>
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
    app.place_service.get_place(place_id).await?;
    let map = super::json_object(&body)?;
    let user_id = super::require_str(&map, "user_id")?;
    let text = super::require_str(&map, "text")?;
    let user_id = super::parse_id::<UserId>(&user_id, "User")?;
    let created = app
        .review_service
        .create_review(place_id, user_id, text)
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `GET /reviews/{id}`
pub async fn get<SR, CR, AR, UR, PR, RR, LR>(
    State(app): State<AppState<SR, CR, AR, UR, PR, RR, LR>>,
    Path(id): Path<String>,
) -> Result<Json<Review>, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
    LR: PlaceAmenityRepository + Send + Sync + 'static,
{
    let id = super::parse_id::<ReviewId>(&id, "Review")?;
    Ok(Json(app.review_service.get_review(id).await?))
}

/// `PUT /reviews/{id}`
pub async fn update<SR, CR, AR, UR, PR, RR, LR>(
    State(app): State<AppState<SR, CR, AR, UR, PR, RR, LR>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Review>, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
    LR: PlaceAmenityRepository + Send + Sync + 'static,
{
    let id = super::parse_id::<ReviewId>(&id, "Review")?;
    app.review_service.get_review(id).await?;
    let patch: ReviewPatch = super::decode(super::json_object(&body)?)?;
    Ok(Json(app.review_service.update_review(id, patch).await?))
}

/// `DELETE /reviews/{id}`
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
    let id = super::parse_id::<ReviewId>(&id, "Review")?;
    app.review_service.delete_review(id).await?;
    Ok(Json(super::empty_object()))
}
