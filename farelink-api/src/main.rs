use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use farelink_api::{app, AppState};
use farelink_search::{Aggregator, SearchService};
use farelink_store::{MemoryCache, SearchCache};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "farelink_api=debug,farelink_search=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = farelink_store::Config::load().expect("Failed to load config");
    tracing::info!("Starting Farelink API on port {}", config.server.port);

    let providers = farelink_providers::default_registry(Path::new(&config.providers.data_dir));
    let aggregator = Aggregator::new(providers);

    let cache: Option<Arc<dyn SearchCache>> = if config.cache.enabled {
        let cache = Arc::new(MemoryCache::new(&config.cache));
        let _sweeper = cache.spawn_sweeper();
        Some(cache)
    } else {
        tracing::info!("Response caching disabled");
        None
    };

    let service = Arc::new(SearchService::new(aggregator, cache));
    let app = app(AppState { service });

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to listen for shutdown signal");
    tracing::info!("Shutting down");
}
