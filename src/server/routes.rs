//! Axum router for pickup intake.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
    routing::{get, post},
};
use serde::Serialize;
use tracing::{Instrument, info, info_span, warn};
use uuid::Uuid;

use super::cors::cors_layer;
use crate::config::AppConfig;
use crate::error::{Error, Result};
use crate::notify::Notifier;
use crate::pickup::{PickupRequest, compose};
use crate::routing::{RoutingTable, escalate, resolve};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub notifier: Arc<dyn Notifier>,
}

/// Body returned for an accepted pickup request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickupResponse {
    pub ok: bool,
    pub verified: bool,
    pub routed_by: String,
    /// Addresses actually mailed, after escalation.
    pub to: Vec<String>,
    pub cc: Vec<String>,
}

/// Build the Axum router with health and pickup routes.
pub fn pickup_routes(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors);

    Router::new()
        .route("/health", get(health))
        .route("/pickup-request", post(pickup_request))
        .layer(cors)
        .with_state(state)
}

// ── Health ──────────────────────────────────────────────────────────────

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "ok": true }))
}

// ── Pickup ──────────────────────────────────────────────────────────────

async fn pickup_request(
    State(state): State<AppState>,
    payload: std::result::Result<Json<PickupRequest>, JsonRejection>,
) -> Result<Json<PickupResponse>> {
    let Json(request) = payload.map_err(|rejection| Error::Validation(rejection.body_text()))?;
    let span = info_span!(
        "pickup_request",
        request_id = %Uuid::new_v4(),
        clinic_code = %request.clinic_code,
    );
    dispatch(&state, &request).instrument(span).await.map(Json)
}

/// Route, render and send one pickup request.
///
/// The routing file is read fresh each call. Unverified requests go to the
/// default recipients with the admin list on CC.
pub async fn dispatch(state: &AppState, request: &PickupRequest) -> Result<PickupResponse> {
    request.validate()?;

    let table = RoutingTable::load(&state.config.routing_file).await?;
    let routing = resolve(request, &table);
    let email = compose(request, &routing);
    let delivery = escalate(&routing, &table);

    if !routing.verified {
        warn!(
            routed_by = %routing.routed_by,
            "Unverified clinic code, escalating to default dispatch"
        );
    }

    state
        .notifier
        .send(&delivery.to, &delivery.cc, &email.subject, &email.body)
        .await?;

    info!(
        routed_by = %routing.routed_by,
        verified = routing.verified,
        recipients = delivery.to.len() + delivery.cc.len(),
        "Pickup request dispatched"
    );

    Ok(PickupResponse {
        ok: true,
        verified: routing.verified,
        routed_by: routing.routed_by,
        to: delivery.to,
        cc: delivery.cc,
    })
}
