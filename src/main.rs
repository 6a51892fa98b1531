//! Feedback Collector server binary.
//!
//! Bootstraps configuration, the PostgreSQL pool, the HTTP router, and the
//! optional keep-alive heartbeat, then serves until ctrl-c.

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tower::ServiceBuilder;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use feedback_collector::adapters::heartbeat::spawn_heartbeat;
use feedback_collector::adapters::http::{cors_layer, feedback_router, FeedbackAppState};
use feedback_collector::adapters::postgres::PostgresFeedbackStore;
use feedback_collector::config::AppConfig;
use feedback_collector::domain::feedback::SentimentClassifier;
use feedback_collector::ports::FeedbackStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .init();

    config.validate()?;

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .idle_timeout(config.database.idle_timeout())
        .max_lifetime(config.database.max_lifetime())
        .connect(&config.database.url)
        .await?;
    tracing::info!("connected to PostgreSQL database");

    let store = PostgresFeedbackStore::new(pool);
    store.init_schema().await?;

    let store: Arc<dyn FeedbackStore> = Arc::new(store);
    let classifier = Arc::new(SentimentClassifier::default());
    let state = FeedbackAppState::new(store, classifier);

    let app = feedback_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors_layer(&config.server.cors_origins_list()))
            .layer(TimeoutLayer::new(config.server.request_timeout())),
    );

    let heartbeat = config
        .heartbeat
        .target_url
        .clone()
        .map(|url| spawn_heartbeat(url, config.heartbeat.interval()));

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "feedback collector listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(handle) = heartbeat {
        handle.abort();
    }
    tracing::info!("shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install ctrl-c handler");
        return;
    }
    tracing::info!("shutdown signal received");
}
