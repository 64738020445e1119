//! # stays-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that storage adapters must implement
//!   (driven/outbound ports): one repository per record kind plus the
//!   place↔amenity membership collection
//! - Provide one application service per resource implementing the
//!   uniform list/get/create/update/delete contract, including
//!   parent-reference resolution (a city's state, a place's city and
//!   owner, a review's place and author)
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `stays-domain` only. Never imports adapter crates.
//! Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
