//! SMTP notifier via lettre.
//!
//! One connection per message: STARTTLS, login, send, close. The blocking
//! transport runs on the blocking pool so a slow relay never stalls the
//! runtime.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use secrecy::ExposeSecret;
use tracing::info;

use super::Notifier;
use crate::config::{AppConfig, SmtpSettings};
use crate::error::{Error, Result};

/// Connection establishment timeout.
const SMTP_TIMEOUT: Duration = Duration::from_secs(15);

/// Sends pickup emails through the configured SMTP relay.
pub struct SmtpNotifier {
    config: Arc<AppConfig>,
}

impl SmtpNotifier {
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn send(&self, to: &[String], cc: &[String], subject: &str, body: &str) -> Result<()> {
        let settings = self.config.smtp.require()?;
        if to.is_empty() {
            return Err(Error::NoRecipients);
        }

        let email = build_message(settings.from_email, to, cc, subject, body)?;
        let transport = build_transport(&settings)?;

        tokio::task::spawn_blocking(move || transport.send(&email))
            .await
            .map_err(|e| Error::Delivery(format!("SMTP task failed: {e}")))?
            .map_err(|e| Error::Delivery(e.to_string()))?;

        info!(
            host = %settings.host,
            to = %to.join(", "),
            cc = %cc.join(", "),
            "Pickup email sent"
        );
        Ok(())
    }
}

/// Build the plain-text message. The envelope covers every To and Cc address.
pub fn build_message(
    from: &str,
    to: &[String],
    cc: &[String],
    subject: &str,
    body: &str,
) -> Result<Message> {
    let mut builder = Message::builder()
        .from(parse_mailbox(from, "from")?)
        .subject(subject)
        .date_now()
        .header(ContentType::TEXT_PLAIN);

    for addr in to {
        builder = builder.to(parse_mailbox(addr, "to")?);
    }
    for addr in cc {
        builder = builder.cc(parse_mailbox(addr, "cc")?);
    }

    builder
        .body(body.to_string())
        .map_err(|e| Error::Delivery(format!("Failed to build email: {e}")))
}

fn parse_mailbox(addr: &str, field: &str) -> Result<Mailbox> {
    addr.parse()
        .map_err(|e| Error::Delivery(format!("Invalid {field} address {addr:?}: {e}")))
}

fn build_transport(settings: &SmtpSettings<'_>) -> Result<SmtpTransport> {
    let creds = Credentials::new(
        settings.username.to_string(),
        settings.password.expose_secret().to_string(),
    );

    Ok(SmtpTransport::starttls_relay(settings.host)
        .map_err(|e| Error::Delivery(format!("SMTP relay error: {e}")))?
        .port(settings.port)
        .credentials(creds)
        .timeout(Some(SMTP_TIMEOUT))
        .build())
}
