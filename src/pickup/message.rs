//! Subject and body of the dispatch email.

use std::fmt::Write as _;

use super::model::PickupRequest;
use crate::routing::RoutingResult;

const UNVERIFIED_PREFIX: &str = "[UNVERIFIED] ";
const MISSING: &str = "-";

/// Rendered email content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickupEmail {
    pub subject: String,
    pub body: String,
}

/// Build the subject and plain-text body for a routed request.
pub fn compose(request: &PickupRequest, routing: &RoutingResult) -> PickupEmail {
    PickupEmail {
        subject: subject(request, routing.verified),
        body: body(request, &routing.routed_by, routing.verified),
    }
}

fn subject(request: &PickupRequest, verified: bool) -> String {
    let prefix = if verified { "" } else { UNVERIFIED_PREFIX };
    format!(
        "{prefix}[Pickup Request] {} ({} {}) - {}",
        request.clinic_name, request.city, request.zip, request.pickup_date
    )
}

fn body(request: &PickupRequest, routed_by: &str, verified: bool) -> String {
    // Empty strings from untouched form inputs count as absent.
    let or_missing = |value: &Option<String>| {
        value
            .as_deref()
            .filter(|v| !v.is_empty())
            .unwrap_or(MISSING)
            .to_string()
    };

    let mut out = String::new();
    if !verified {
        // Writing into a String cannot fail.
        let _ = writeln!(
            out,
            "⚠ Unverified clinic_code submitted: {}",
            request.clinic_code
        );
        out.push_str("⚠ Action: Sent to default dispatch + admin CC for verification.\n\n");
    }

    out.push_str("New pickup request received.\n\n");
    let _ = writeln!(out, "Clinic Code: {}", request.clinic_code);
    let _ = writeln!(out, "Clinic: {}", request.clinic_name);
    let _ = writeln!(out, "Phone: {}", or_missing(&request.clinic_phone));
    let _ = writeln!(
        out,
        "Address: {}, {}, {} {}",
        request.address1, request.city, request.state, request.zip
    );
    let _ = writeln!(out, "Pickup Date: {}", request.pickup_date);
    let _ = writeln!(out, "Time Window: {}", or_missing(&request.time_window));
    let _ = writeln!(out, "Contact Email: {}", or_missing(&request.contact_email));
    let _ = writeln!(out, "Notes: {}", or_missing(&request.notes));
    let _ = writeln!(out, "\nRouting: {routed_by}");
    out
}
