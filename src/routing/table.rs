//! Routing table document, loaded from JSON on every request.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};

/// A clinic-code route. The only tier that counts as verified.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClinicRoute {
    #[serde(default)]
    pub clinic_code: Option<String>,
    #[serde(default)]
    pub recipients: Vec<String>,
}

/// A route covering a set of zip codes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ZipRoute {
    #[serde(default)]
    pub zips: Vec<String>,
    #[serde(default)]
    pub recipients: Vec<String>,
}

/// A route covering a set of city names.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CityRoute {
    #[serde(default)]
    pub cities: Vec<String>,
    #[serde(default)]
    pub recipients: Vec<String>,
}

/// The full routing document.
///
/// Every key is optional; a missing list is an empty list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoutingTable {
    #[serde(default)]
    pub clinic_routes: Vec<ClinicRoute>,
    #[serde(default)]
    pub zip_routes: Vec<ZipRoute>,
    #[serde(default)]
    pub city_routes: Vec<CityRoute>,
    #[serde(default)]
    pub default_recipients: Vec<String>,
    #[serde(default)]
    pub admin_cc: Vec<String>,
}

impl RoutingTable {
    /// Parse a routing document.
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| Error::RoutingLoad(e.to_string()))
    }

    /// Read and parse the routing document at `path`.
    pub async fn load(path: &Path) -> Result<Self> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| Error::RoutingLoad(format!("{}: {e}", path.display())))?;
        let table = Self::from_json(&raw)?;
        debug!(
            path = %path.display(),
            clinic_routes = table.clinic_routes.len(),
            zip_routes = table.zip_routes.len(),
            city_routes = table.city_routes.len(),
            "Routing table loaded"
        );
        Ok(table)
    }
}
