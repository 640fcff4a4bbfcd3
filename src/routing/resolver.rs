//! Routing resolver: picks recipients for a pickup request.
//!
//! Tiers are evaluated in strict precedence order and the first match wins:
//! 1. clinic code (trimmed, case-sensitive) → verified
//! 2. zip (trimmed request value, exact membership)
//! 3. city (trimmed, uppercased on both sides)
//! 4. default recipients
//!
//! Blank values get no special treatment. A blank clinic code matches a
//! route whose code is blank or missing, because that is what string
//! equality says.

use std::fmt;

use tracing::debug;

use super::table::RoutingTable;
use crate::pickup::PickupRequest;

/// Which tier of the routing table produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutingTier {
    ClinicCode,
    Zip,
    City,
    Default,
}

impl RoutingTier {
    /// Only a clinic-code match is verified.
    pub fn is_verified(self) -> bool {
        matches!(self, RoutingTier::ClinicCode)
    }
}

impl fmt::Display for RoutingTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RoutingTier::ClinicCode => "clinic_code",
            RoutingTier::Zip => "zip",
            RoutingTier::City => "city",
            RoutingTier::Default => "default",
        };
        f.write_str(label)
    }
}

/// Outcome of resolving a request against the routing table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingResult {
    pub tier: RoutingTier,
    /// Recipients of the matched entry, before escalation.
    pub recipients: Vec<String>,
    /// Provenance tag, e.g. `clinic_code:C1` or `default`.
    pub routed_by: String,
    pub verified: bool,
}

impl RoutingResult {
    fn matched(tier: RoutingTier, key: &str, recipients: &[String]) -> Self {
        Self {
            tier,
            recipients: recipients.to_vec(),
            routed_by: format!("{tier}:{key}"),
            verified: tier.is_verified(),
        }
    }

    fn default_route(table: &RoutingTable) -> Self {
        Self {
            tier: RoutingTier::Default,
            recipients: table.default_recipients.clone(),
            routed_by: RoutingTier::Default.to_string(),
            verified: false,
        }
    }
}

/// Trim and uppercase a city name for comparison.
fn normalize_city(city: &str) -> String {
    city.trim().to_uppercase()
}

/// Resolve the recipients for `request`.
pub fn resolve(request: &PickupRequest, table: &RoutingTable) -> RoutingResult {
    let code = request.clinic_code.trim();
    let zip = request.zip.trim();
    let city = normalize_city(&request.city);

    let result = if let Some(route) = table
        .clinic_routes
        .iter()
        .find(|r| r.clinic_code.as_deref().unwrap_or("").trim() == code)
    {
        RoutingResult::matched(RoutingTier::ClinicCode, code, &route.recipients)
    } else if let Some(route) = table
        .zip_routes
        .iter()
        .find(|r| r.zips.iter().any(|z| z == zip))
    {
        RoutingResult::matched(RoutingTier::Zip, zip, &route.recipients)
    } else if let Some(route) = table
        .city_routes
        .iter()
        .find(|r| r.cities.iter().any(|c| normalize_city(c) == city))
    {
        RoutingResult::matched(RoutingTier::City, &city, &route.recipients)
    } else {
        RoutingResult::default_route(table)
    };

    debug!(
        clinic_code = %code,
        routed_by = %result.routed_by,
        verified = result.verified,
        "Pickup request routed"
    );
    result
}
