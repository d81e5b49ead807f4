//! Server configuration and startup.

use std::time::Duration;

use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::routes;
use crate::state::AppState;

/// Preflight cache lifetime.
const CORS_MAX_AGE: Duration = Duration::from_secs(12 * 60 * 60);

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Readiness and health
        .route("/", get(routes::health::ready))
        .route("/health", get(routes::health::health_check))
        // IRR
        .route("/solve", post(routes::solve::solve))
        // Middleware
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Any origin, with credentials, so the origin is mirrored rather than `*`.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::ORIGIN, header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([header::CONTENT_LENGTH])
        .allow_credentials(true)
        .max_age(CORS_MAX_AGE)
}

/// Run the server.
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let app = create_router(AppState::from_config(&config));

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("IRR API Server listening on http://{}", addr);
    tracing::info!("API endpoints:");
    tracing::info!("  GET  /");
    tracing::info!("  GET  /health");
    tracing::info!("  POST /solve");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Shutdown signal handler.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install CTRL+C handler: {}", e);
        return;
    }
    tracing::info!("Shutting down...");
}
