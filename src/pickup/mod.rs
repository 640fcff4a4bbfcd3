//! Pickup requests and the email rendered for them.

pub mod message;
pub mod model;

pub use message::{PickupEmail, compose};
pub use model::PickupRequest;
