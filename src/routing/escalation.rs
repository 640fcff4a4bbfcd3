//! Escalation of unverified requests.
//!
//! Anything not routed by clinic code is provisional: it goes to the
//! default dispatch list with administrators on CC. The zip and city tiers
//! therefore only change the `routed_by` label, never who receives mail.

use serde::Serialize;

use super::resolver::RoutingResult;
use super::table::RoutingTable;

/// Final recipient lists for a pickup email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Delivery {
    pub to: Vec<String>,
    pub cc: Vec<String>,
}

/// Apply the escalation policy to a resolved route.
pub fn escalate(result: &RoutingResult, table: &RoutingTable) -> Delivery {
    if result.verified {
        Delivery {
            to: result.recipients.clone(),
            cc: Vec::new(),
        }
    } else {
        Delivery {
            to: table.default_recipients.clone(),
            cc: table.admin_cc.clone(),
        }
    }
}
