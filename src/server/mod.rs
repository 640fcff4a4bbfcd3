//! HTTP surface: health check and pickup intake.

pub mod cors;
pub mod routes;

pub use routes::{AppState, PickupResponse, pickup_routes};
