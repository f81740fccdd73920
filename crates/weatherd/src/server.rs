//! HTTP server for weatherd.

use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::{Mutex, RwLock};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::Config;
use crate::render::Renderer;
use crate::routes;
use crate::store::TelemetryStore;

/// Application state shared across handlers.
///
/// The store sits behind a writer lock so one `apply` is atomic against
/// concurrent `snapshot` calls; the renderer owns mutable sink handles
/// and is serialized behind its own lock.
pub struct AppState {
    pub store: Arc<RwLock<TelemetryStore>>,
    pub renderer: Arc<Mutex<Renderer>>,
    pub config: Config,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(store: TelemetryStore, renderer: Renderer, config: Config) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            renderer: Arc::new(Mutex::new(renderer)),
            config,
            start_time: Instant::now(),
        }
    }
}

/// Build the router over shared state.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(routes::update_routes())
        .merge(routes::report_routes())
        .merge(routes::health_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Run the HTTP server until ctrl-c.
pub async fn run(state: AppState, bind: &str) -> Result<()> {
    let state = Arc::new(state);

    let listener = tokio::net::TcpListener::bind(bind).await?;
    let addr = listener.local_addr()?;
    info!("Listening on http://{}", addr);

    state
        .renderer
        .lock()
        .await
        .startup_screen(&addr.to_string())?;

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Shutting down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for shutdown signal: {}", e);
    }
}
