//! HTTP routes: update ingest, report, health.

use axum::extract::{Form, Query, State};
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::report;
use crate::server::AppState;
use crate::store::UpdateFields;

type AppStateArc = Arc<AppState>;

// ============================================================================
// Update Ingest
// ============================================================================

pub fn update_routes() -> Router<AppStateArc> {
    Router::new().route("/update", get(update_get).post(update_post))
}

async fn update_get(
    State(state): State<AppStateArc>,
    query: Option<Query<UpdateFields>>,
) -> &'static str {
    let fields = query.map(|Query(q)| q).unwrap_or_default();
    ingest(&state, fields).await
}

async fn update_post(
    State(state): State<AppStateArc>,
    query: Option<Query<UpdateFields>>,
    body: Option<Form<UpdateFields>>,
) -> &'static str {
    let query = query.map(|Query(q)| q).unwrap_or_default();
    let body = body.map(|Form(f)| f).unwrap_or_default();
    ingest(&state, UpdateFields::merge(query, body)).await
}

/// Accept-always ingest: apply whatever parses, drop the rest, re-render,
/// acknowledge. The caller never sees a field-level failure.
async fn ingest(state: &AppState, fields: UpdateFields) -> &'static str {
    debug!("raw update fields: {:?}", fields);

    let snapshot = {
        let mut store = state.store.write().await;
        store.apply(&fields);
        store.snapshot()
    };
    info!(
        "applied update: temp {:.1} hum {:.1} pres {:.1} batt {:.2}",
        snapshot.temperature, snapshot.humidity, snapshot.pressure, snapshot.battery
    );

    let mut renderer = state.renderer.lock().await;
    if let Err(e) = renderer.render(&snapshot) {
        warn!("render pass failed: {}", e);
    }

    "OK"
}

// ============================================================================
// Report
// ============================================================================

pub fn report_routes() -> Router<AppStateArc> {
    Router::new().route("/", get(serve_report))
}

async fn serve_report(State(state): State<AppStateArc>) -> Html<String> {
    let snapshot = state.store.read().await.snapshot();
    let age = snapshot.last_update.map(|at| at.elapsed());
    Html(report::render_report(
        &snapshot,
        age,
        state.config.display.unit,
    ))
}

// ============================================================================
// Health
// ============================================================================

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    version: String,
    uptime_seconds: u64,
    last_update_age_seconds: Option<u64>,
}

pub fn health_routes() -> Router<AppStateArc> {
    Router::new().route("/v1/health", get(health_check))
}

async fn health_check(State(state): State<AppStateArc>) -> Json<HealthResponse> {
    let snapshot = state.store.read().await.snapshot();

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        last_update_age_seconds: snapshot.last_update.map(|at| at.elapsed().as_secs()),
    })
}
