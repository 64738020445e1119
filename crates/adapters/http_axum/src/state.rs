//! Shared application state for axum handlers.

use std::sync::Arc;

use stays_app::services::amenity_service::AmenityService;
use stays_app::services::city_service::CityService;
use stays_app::services::place_amenity_service::PlaceAmenityService;
use stays_app::services::place_service::PlaceService;
use stays_app::services::review_service::ReviewService;
use stays_app::services::state_service::StateService;
use stays_app::services::user_service::UserService;

/// Application state shared across all axum handlers.
///
/// Generic over the seven repository types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do
/// not need to be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<SR, CR, AR, UR, PR, RR, LR> {
    /// State CRUD service.
    pub state_service: Arc<StateService<SR>>,
    /// City CRUD service (resolves the owning state).
    pub city_service: Arc<CityService<CR, SR>>,
    /// Amenity CRUD service.
    pub amenity_service: Arc<AmenityService<AR>>,
    /// User CRUD service.
    pub user_service: Arc<UserService<UR>>,
    /// Place CRUD service (resolves city and owner).
    pub place_service: Arc<PlaceService<PR, CR, UR>>,
    /// Review CRUD service (resolves place and author).
    pub review_service: Arc<ReviewService<RR, PR, UR>>,
    /// Place↔amenity membership service.
    pub place_amenity_service: Arc<PlaceAmenityService<LR, PR, AR>>,
}

impl<SR, CR, AR, UR, PR, RR, LR> Clone for AppState<SR, CR, AR, UR, PR, RR, LR> {
    fn clone(&self) -> Self {
        Self {
            state_service: Arc::clone(&self.state_service),
            city_service: Arc::clone(&self.city_service),
            amenity_service: Arc::clone(&self.amenity_service),
            user_service: Arc::clone(&self.user_service),
            place_service: Arc::clone(&self.place_service),
            review_service: Arc::clone(&self.review_service),
            place_amenity_service: Arc::clone(&self.place_amenity_service),
        }
    }
}

impl<SR, CR, AR, UR, PR, RR, LR> AppState<SR, CR, AR, UR, PR, RR, LR> {
    /// Create a new application state from service instances.
    pub fn new(
        state_service: StateService<SR>,
        city_service: CityService<CR, SR>,
        amenity_service: AmenityService<AR>,
        user_service: UserService<UR>,
        place_service: PlaceService<PR, CR, UR>,
        review_service: ReviewService<RR, PR, UR>,
        place_amenity_service: PlaceAmenityService<LR, PR, AR>,
    ) -> Self {
        Self {
            state_service: Arc::new(state_service),
            city_service: Arc::new(city_service),
            amenity_service: Arc::new(amenity_service),
            user_service: Arc::new(user_service),
            place_service: Arc::new(place_service),
            review_service: Arc::new(review_service),
            place_amenity_service: Arc::new(place_amenity_service),
        }
    }
}
