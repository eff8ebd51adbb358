use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use link_guard_core::{app_config, create_router, initialize_app_state};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Configuration is loaded once, after .env
    let config = app_config::config();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&config.server.rust_log).unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let bind_address = config.server.bind_address.clone();
    info!(
        environment = %config.environment,
        "Starting link guard API on {}",
        bind_address
    );

    let state = initialize_app_state(config.clone());
    info!(
        trusted = state.analyzer.trusted_domains().len(),
        scam = state.analyzer.scam_domains().len(),
        "Reference data ready"
    );

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
