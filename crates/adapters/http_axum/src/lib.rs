//! # stays-adapter-http-axum
//!
//! HTTP adapter — exposes the application services as the JSON REST API.
//!
//! ## Responsibilities
//! - Route table for the six resources, the place↔amenity linkage, and
//!   the `/status` + `/stats` introspection endpoints
//! - Request validation with the legacy error shapes
//!   (`{"error":"Not a JSON"}`, `{"error":"Missing <field>"}`)
//! - Mapping domain errors to status codes (404 with empty body, 400
//!   with an error object, 500 for storage failures)
//!
//! ## Dependency rule
//! Depends on `stays-app` (ports + services) and `stays-domain`.
//! Knows nothing about storage backends.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
