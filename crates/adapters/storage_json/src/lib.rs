//! # stays-adapter-storage-json
//!
//! File-backed JSON persistence adapter.
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `stays-app::ports::storage`
//! - Keep the whole catalog in one JSON file, rewritten atomically per commit
//! - Map between domain types and the serialized index
//!
//! ## Dependency rule
//! Depends on `stays-app` (for port traits) and `stays-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod error;
pub mod repos;
pub mod store;

pub use error::StorageError;
pub use repos::{
    JsonAmenityRepository, JsonCityRepository, JsonPlaceAmenityRepository, JsonPlaceRepository,
    JsonReviewRepository, JsonStateRepository, JsonUserRepository,
};
pub use store::JsonStore;
