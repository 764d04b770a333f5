//! fleetgate-server: HTTP read facade over the fleet Postgres database
//!
//! Exposes fixed read-only queries (shipments, finance, telemetry) and the
//! self-refreshing daily analytics summary via axum. Every request opens
//! its own store connection; the only cross-request state is the
//! precomputed summary living in the database.

pub mod analytics;
pub mod db;
pub mod http;
pub mod state;

use axum::middleware;
use axum::Router;
use fleetgate_core::FleetConfig;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use state::AppState;

/// Build the application router with all routes and layers.
///
/// The timing layer sits closest to the handlers; its duration covers
/// handler work only.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(http::routes::root::router())
        .merge(http::routes::shipments::router())
        .merge(http::routes::finance::router())
        .merge(http::routes::telemetry::router())
        .merge(http::routes::analytics::router())
        .layer(middleware::from_fn(http::timing::process_time))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Start the HTTP server and run until shutdown.
pub async fn serve(config: FleetConfig) -> Result<(), ServeError> {
    let state = AppState::new(&config);
    let app = build_router(state);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "fleetgate listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server startup error type
#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
