//! Reel Engine - Main entry point.

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use reel_engine::api::{self, cors::OriginPolicy};
use reel_engine::infrastructure::{
    config::AppConfig, ids::SystemIds, memory::InMemoryMovieRepo, seed::load_seed,
};
use reel_engine::App;

/// Spawns a task that cancels `cancel_token` on SIGTERM/SIGINT.
fn setup_shutdown_signal(cancel_token: CancellationToken) {
    tokio::spawn(async move {
        let ctrl_c = async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
        };

        #[cfg(unix)]
        let terminate = async {
            match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
                Ok(mut signal) => {
                    signal.recv().await;
                }
                Err(e) => {
                    tracing::error!(error = %e, "Failed to install SIGTERM handler");
                    std::future::pending::<()>().await;
                }
            }
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {
                tracing::info!("Received Ctrl+C, initiating graceful shutdown...");
            }
            _ = terminate => {
                tracing::info!("Received SIGTERM, initiating graceful shutdown...");
            }
        }

        cancel_token.cancel();
    });
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reel_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Reel Engine");

    let cancel_token = CancellationToken::new();
    setup_shutdown_signal(cancel_token.clone());

    let config = AppConfig::from_env()?;
    tracing::info!("Configuration loaded");
    tracing::info!("  CORS origins: {}", config.cors_allowed_origins.join(", "));
    match &config.seed_path {
        Some(path) => tracing::info!("  Seed: {}", path.display()),
        None => tracing::info!("  Seed: bundled"),
    }

    let movies = load_seed(config.seed_path.as_deref()).await?;
    tracing::info!(count = movies.len(), "Movie store seeded");

    let app = Arc::new(App::new(
        Arc::new(InMemoryMovieRepo::with_movies(movies)),
        Arc::new(SystemIds::new()),
    ));
    let policy = OriginPolicy::new(config.cors_allowed_origins.clone());
    let router = api::router(app, policy);

    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(cancel_token.cancelled_owned())
        .await
        .context("HTTP server failed")?;

    tracing::info!("Reel Engine shut down");
    Ok(())
}
