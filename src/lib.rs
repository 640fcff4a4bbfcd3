//! Pickup dispatch — routes clinic pickup requests to the right inbox.

pub mod config;
pub mod error;
pub mod notify;
pub mod pickup;
pub mod routing;
pub mod server;
