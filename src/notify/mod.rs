//! Outbound notification of routed pickup requests.

pub mod smtp;

use async_trait::async_trait;

use crate::error::Result;

pub use smtp::SmtpNotifier;

/// Delivers one rendered message to a set of recipients.
///
/// Implementations make a single attempt; failures are returned to the
/// caller, never retried or queued.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Send `body` to every address in `to` and `cc`.
    async fn send(&self, to: &[String], cc: &[String], subject: &str, body: &str) -> Result<()>;
}
