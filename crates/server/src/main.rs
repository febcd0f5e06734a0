use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex_core::{
    load_config, validate_config, CatalogLoader, CreatureSource, NameIndex, PageLoad,
    PokeApiClient,
};

use pokedex_server::api::create_router;
use pokedex_server::state::AppState;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine config path
    let config_path = std::env::var("POKEDEX_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.toml"));

    // Load configuration
    info!("Loading configuration from {:?}", config_path);
    let config = load_config(&config_path)
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;

    // Validate configuration
    validate_config(&config).context("Configuration validation failed")?;

    info!("Configuration loaded successfully");
    info!("Remote source: {}", config.pokeapi.base_url);

    // Create the remote source client
    let source: Arc<dyn CreatureSource> = Arc::new(
        PokeApiClient::new(&config.pokeapi).context("Failed to create PokeAPI client")?,
    );

    // Create the catalog loader
    let loader = CatalogLoader::with_limits(
        Arc::clone(&source),
        config.catalog.page_size,
        config.catalog.detail_concurrency,
    );

    // Load the name index once; a failure degrades to disabled suggestions.
    let name_index = NameIndex::load(source.as_ref(), config.pokeapi.name_index_limit).await;
    if name_index.is_empty() {
        warn!("Name index is empty, suggestions are disabled");
    } else {
        info!("Name index loaded with {} names", name_index.len());
    }

    // Prefetch the first page so the catalog is not empty on first request.
    match loader.load_next_page().await {
        PageLoad::Appended(n) => info!("Prefetched first page ({} entries)", n),
        outcome => warn!(?outcome, "First page prefetch did not append"),
    }

    // Create app state
    let state = Arc::new(AppState::new(config.clone(), source, loader, name_index));

    // Create router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(config.server.host, config.server.port);
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shut down");

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
