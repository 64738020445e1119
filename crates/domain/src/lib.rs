//! # stays-domain
//!
//! Pure domain model for the stays vacation-rental catalog.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define the six catalog records: **State**, **City**, **Amenity**,
//!   **User**, **Place**, **Review**
//! - Own construction rules (server-assigned ids and timestamps) and the
//!   per-record update allow-lists (patch types)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod amenity;
pub mod city;
pub mod place;
pub mod review;
pub mod state;
pub mod user;
