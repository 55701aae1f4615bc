//! # Valentine Node
//!
//! Proposal store service exposing the Valentine HTTP API.

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub mod api;
pub mod config;
pub mod error;
pub mod state;

pub use config::Config;
pub use state::AppState;

/// Install the global tracing subscriber. `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "valentine=info,tower_http=info".into()),
        )
        .init();
}

/// Create the API router.
pub fn create_router(state: AppState, config: &Config) -> Router {
    Router::new()
        // Health check
        .route("/health", get(api::health::health_check))

        // API root
        .route("/api", get(api::health::root))
        .route("/api/", get(api::health::root))

        // Proposal API
        .route(
            "/api/proposals",
            post(api::proposals::create_proposal).get(api::proposals::list_proposals),
        )
        .route(
            "/api/proposals/:id",
            get(api::proposals::get_proposal).patch(api::proposals::update_proposal),
        )

        // Status checks
        .route(
            "/api/status",
            post(api::status::create_status_check).get(api::status::list_status_checks),
        )

        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(config.cors_layer()),
        )
        .with_state(state)
}

/// Run the node until ctrl-c.
pub async fn run_server(config: Config) -> anyhow::Result<()> {
    let addr = config.addr()?;
    let app = create_router(AppState::new(), &config);

    info!("💘 Valentine node listening on http://{}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Valentine node stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
