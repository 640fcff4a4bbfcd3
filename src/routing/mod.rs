//! Recipient routing for pickup requests.

pub mod escalation;
pub mod resolver;
pub mod table;

pub use escalation::{Delivery, escalate};
pub use resolver::{RoutingResult, RoutingTier, resolve};
pub use table::{CityRoute, ClinicRoute, RoutingTable, ZipRoute};
