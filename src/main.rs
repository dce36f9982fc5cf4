use std::sync::Arc;

use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use tastemap_api::{
    api::{create_router, AppState},
    config::Config,
    db::{create_redis_client, InMemoryProfileStore, ProfileStore, RedisProfileStore},
    Catalog,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("tastemap_api=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    let catalog = match &config.catalog_path {
        Some(path) => Catalog::from_path(path)?,
        None => Catalog::builtin()?,
    };

    let profiles: Arc<dyn ProfileStore> = match &config.redis_url {
        Some(url) => Arc::new(RedisProfileStore::new(create_redis_client(url)?)),
        None => Arc::new(InMemoryProfileStore::new()),
    };

    tracing::info!(
        catalog_entries = catalog.len(),
        profile_store = profiles.name(),
        "Initialized application state"
    );

    let state = AppState::new(Arc::new(catalog), profiles, config.limits());

    let app = create_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!(address = %listener.local_addr()?, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
