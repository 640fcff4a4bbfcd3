//! Pickup request payload.

use chrono::NaiveDate;
use lettre::Address;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A pickup request submitted by a clinic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickupRequest {
    pub clinic_code: String,
    pub clinic_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clinic_phone: Option<String>,
    pub address1: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    /// Calendar date, `YYYY-MM-DD` on the wire.
    pub pickup_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_window: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
}

impl PickupRequest {
    /// Check field contents that the JSON schema alone cannot express.
    pub fn validate(&self) -> Result<()> {
        if let Some(email) = &self.contact_email {
            email.parse::<Address>().map_err(|e| {
                Error::Validation(format!("contact_email {email:?} is not a valid address: {e}"))
            })?;
        }
        Ok(())
    }
}
