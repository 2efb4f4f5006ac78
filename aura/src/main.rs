use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use aura::api::{create_router, AppState};
use aura::cache::{AnalysisCache, LibSqlCacheBackend};
use aura::catalog::CatalogProvider;
use aura::config::Config;
use aura::llm::LlmProvider;
use aura::photosource::PhotoSourceProvider;
use aura::vision::VisionProvider;

#[derive(Parser)]
#[command(name = "aura")]
#[command(about = "Image mood analysis service: labels, emotion, songs, and a story")]
struct Args {
    /// Override the listen port from the environment
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aura=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = Config::from_env();
    if let Some(port) = args.port {
        config.server.port = port;
    }

    tracing::info!("Initializing analysis cache: {}...", config.cache.url);
    let backend = LibSqlCacheBackend::new(&config.cache).await?;
    let cache = AnalysisCache::new(Arc::new(backend));

    let vision = VisionProvider::new(&config.vision);
    if !vision.is_available() {
        tracing::warn!("Vision unavailable - analysis requests will fail until VISION_API_KEY is set");
    }

    let llm = LlmProvider::new(&config.llm);
    if !llm.is_available() {
        tracing::warn!("Generation unavailable - recommendations and stories will be empty");
    }

    let catalog = CatalogProvider::new(&config.catalog);
    if !catalog.is_available() {
        tracing::warn!("Catalog unavailable - recommended songs will not resolve to links");
    }

    let photos = PhotoSourceProvider::new(&config.photos);
    if !photos.is_available() {
        tracing::warn!("Photo source unavailable - login and photo listing are disabled");
    }

    let state = AppState::new(config.clone(), cache, vision, llm, catalog, photos);
    let app = create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!("Aura starting on http://{}", addr);
    tracing::info!("  Health check: http://{}/api/v1/health", addr);
    tracing::info!("  API docs:     http://{}/api/v1/docs", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

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
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
