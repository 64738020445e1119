//! # staysd — stays daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env vars)
//! - Select and initialize the storage backend
//! - Construct repository implementations (adapters)
//! - Construct application services, injecting repositories via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::sync::Arc;

use stays_adapter_http_axum::router;
use stays_adapter_http_axum::state::AppState;
use stays_adapter_storage_json::{
    JsonAmenityRepository, JsonCityRepository, JsonPlaceAmenityRepository, JsonPlaceRepository,
    JsonReviewRepository, JsonStateRepository, JsonStore, JsonUserRepository,
};
use stays_adapter_storage_sqlite_sqlx::{
    SqliteAmenityRepository, SqliteCityRepository, SqlitePlaceAmenityRepository,
    SqlitePlaceRepository, SqliteReviewRepository, SqliteStateRepository, SqliteUserRepository,
};
use stays_app::services::amenity_service::AmenityService;
use stays_app::services::city_service::CityService;
use stays_app::services::place_amenity_service::PlaceAmenityService;
use stays_app::services::place_service::PlaceService;
use stays_app::services::review_service::ReviewService;
use stays_app::services::state_service::StateService;
use stays_app::services::user_service::UserService;

use crate::config::{Config, StorageBackend};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.logging.filter))
        .init();

    let app = match config.storage.backend {
        StorageBackend::Sqlite => sqlite_app(&config).await?,
        StorageBackend::Json => json_app(&config)?,
    };

    let bind_addr = config.bind_addr();
    tracing::info!(addr = %bind_addr, "staysd listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn sqlite_app(config: &Config) -> Result<axum::Router, Box<dyn std::error::Error>> {
    let db = stays_adapter_storage_sqlite_sqlx::Config {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await?;
    let pool = db.pool().clone();

    let state = AppState::new(
        StateService::new(SqliteStateRepository::new(pool.clone())),
        CityService::new(
            SqliteCityRepository::new(pool.clone()),
            SqliteStateRepository::new(pool.clone()),
        ),
        AmenityService::new(SqliteAmenityRepository::new(pool.clone())),
        UserService::new(SqliteUserRepository::new(pool.clone())),
        PlaceService::new(
            SqlitePlaceRepository::new(pool.clone()),
            SqliteCityRepository::new(pool.clone()),
            SqliteUserRepository::new(pool.clone()),
        ),
        ReviewService::new(
            SqliteReviewRepository::new(pool.clone()),
            SqlitePlaceRepository::new(pool.clone()),
            SqliteUserRepository::new(pool.clone()),
        ),
        PlaceAmenityService::new(
            SqlitePlaceAmenityRepository::new(pool.clone()),
            SqlitePlaceRepository::new(pool.clone()),
            SqliteAmenityRepository::new(pool),
        ),
    );

    Ok(router::build(state))
}

fn json_app(config: &Config) -> Result<axum::Router, Box<dyn std::error::Error>> {
    let store = Arc::new(JsonStore::open(&config.storage.file)?);

    let state = AppState::new(
        StateService::new(JsonStateRepository::new(Arc::clone(&store))),
        CityService::new(
            JsonCityRepository::new(Arc::clone(&store)),
            JsonStateRepository::new(Arc::clone(&store)),
        ),
        AmenityService::new(JsonAmenityRepository::new(Arc::clone(&store))),
        UserService::new(JsonUserRepository::new(Arc::clone(&store))),
        PlaceService::new(
            JsonPlaceRepository::new(Arc::clone(&store)),
            JsonCityRepository::new(Arc::clone(&store)),
            JsonUserRepository::new(Arc::clone(&store)),
        ),
        ReviewService::new(
            JsonReviewRepository::new(Arc::clone(&store)),
            JsonPlaceRepository::new(Arc::clone(&store)),
            JsonUserRepository::new(Arc::clone(&store)),
        ),
        PlaceAmenityService::new(
            JsonPlaceAmenityRepository::new(Arc::clone(&store)),
            JsonPlaceRepository::new(Arc::clone(&store)),
            JsonAmenityRepository::new(store),
        ),
    );

    Ok(router::build(state))
}
