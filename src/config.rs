//! Configuration types.
//!
//! Everything is read from the environment once at startup and handed to
//! the router as an [`AppConfig`]. Nothing below reads process state after
//! that point.

use std::path::PathBuf;

use secrecy::SecretString;

use crate::error::ConfigError;

/// Origins allowed when `CORS_ALLOW_ORIGINS` is anything other than `*`.
pub const ALLOWED_ORIGINS: &[&str] = &[
    "https://axion-dental-pickup-app.netlify.app",
    "http://localhost:3000",
];

const DEFAULT_ROUTING_FILE: &str = "./routing.json";
const DEFAULT_SMTP_PORT: u16 = 587;
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;

/// Service configuration.
#[derive(Debug)]
pub struct AppConfig {
    /// Bind address for the HTTP server.
    pub host: String,
    /// Bind port for the HTTP server.
    pub port: u16,
    /// Routing table location, re-read on every request.
    pub routing_file: PathBuf,
    pub cors: CorsPolicy,
    pub smtp: SmtpConfig,
}

/// Which browser origins may call the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsPolicy {
    /// `CORS_ALLOW_ORIGINS=*`: any origin, echoed back with credentials.
    Any,
    /// Fixed list of origins, credentials allowed.
    AllowList(Vec<String>),
}

/// SMTP settings.
///
/// Values are optional here: the service starts without them and the
/// notifier refuses to send until they are all present.
#[derive(Debug)]
pub struct SmtpConfig {
    pub from_email: Option<String>,
    pub host: Option<String>,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<SecretString>,
}

/// SMTP settings with every required value present.
#[derive(Debug)]
pub struct SmtpSettings<'a> {
    pub from_email: &'a str,
    pub host: &'a str,
    pub port: u16,
    pub username: &'a str,
    pub password: &'a SecretString,
}

impl AppConfig {
    /// Build config from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// Empty values are treated the same as unset ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = parse_port(get("PICKUP_PORT"), "PICKUP_PORT", DEFAULT_PORT)?;
        let smtp_port = parse_port(get("SMTP_PORT"), "SMTP_PORT", DEFAULT_SMTP_PORT)?;

        let cors = match get("CORS_ALLOW_ORIGINS").as_deref() {
            None | Some("*") => CorsPolicy::Any,
            Some(_) => CorsPolicy::AllowList(
                ALLOWED_ORIGINS.iter().map(|o| o.to_string()).collect(),
            ),
        };

        Ok(Self {
            host: get("PICKUP_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            routing_file: get("ROUTING_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ROUTING_FILE)),
            cors,
            smtp: SmtpConfig {
                from_email: get("FROM_EMAIL"),
                host: get("SMTP_HOST"),
                port: smtp_port,
                username: get("SMTP_USER"),
                password: get("SMTP_PASS").map(SecretString::from),
            },
        })
    }

    /// Socket address string the server binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl SmtpConfig {
    /// Return the settings if every required value is present.
    pub fn require(&self) -> Result<SmtpSettings<'_>, ConfigError> {
        match (
            self.from_email.as_deref(),
            self.host.as_deref(),
            self.username.as_deref(),
            self.password.as_ref(),
        ) {
            (Some(from_email), Some(host), Some(username), Some(password)) => Ok(SmtpSettings {
                from_email,
                host,
                port: self.port,
                username,
                password,
            }),
            _ => {
                let mut missing = Vec::new();
                if self.from_email.is_none() {
                    missing.push("FROM_EMAIL");
                }
                if self.host.is_none() {
                    missing.push("SMTP_HOST");
                }
                if self.username.is_none() {
                    missing.push("SMTP_USER");
                }
                if self.password.is_none() {
                    missing.push("SMTP_PASS");
                }
                Err(ConfigError::SmtpIncomplete { missing })
            }
        }
    }
}

fn parse_port(value: Option<String>, key: &str, default: u16) -> Result<u16, ConfigError> {
    match value {
        None => Ok(default),
        Some(raw) => raw.parse().map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("{raw:?} is not a valid port: {e}"),
        }),
    }
}
