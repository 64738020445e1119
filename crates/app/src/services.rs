//! Application services — one per resource, plus the place↔amenity
//! membership use-cases.

pub mod amenity_service;
pub mod city_service;
pub mod place_amenity_service;
pub mod place_service;
pub mod review_service;
pub mod state_service;
pub mod user_service;

#[cfg(test)]
pub(crate) mod memory;
