//! notify-gateway server entry point.
//!
//! Connects both backends, runs migrations, and starts the Axum HTTP
//! server.

use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use notify_gateway::api;
use notify_gateway::app_state::AppState;
use notify_gateway::channel::AmqpNotificationChannel;
use notify_gateway::config::GatewayConfig;
use notify_gateway::persistence::PostgresEntityStore;
use notify_gateway::service::IngestService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = GatewayConfig::from_env()?;
    tracing::info!(addr = %config.listen_addr, "starting notify-gateway");

    // Connect the store
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .min_connections(config.database_min_connections)
        .acquire_timeout(Duration::from_secs(config.database_connect_timeout_secs))
        .connect(&config.database_url)
        .await?;
    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("connected to PostgreSQL");

    // Connect the broker and declare the exchange
    let channel = AmqpNotificationChannel::connect(&config.amqp_url, &config.amqp_exchange).await?;

    // Build the coordinator
    let ingest_service = IngestService::new(
        Arc::new(PostgresEntityStore::new(pool)),
        Arc::new(channel),
        Duration::from_secs(config.store_timeout_secs),
        Duration::from_secs(config.publish_timeout_secs),
    );

    // Build application state and router
    let app_state = AppState {
        ingest_service: Arc::new(ingest_service),
    };
    let app = api::build_router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
