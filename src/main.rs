use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use artfolio_api::{
    config::Config,
    db::{create_pool, PgArtworkStore},
    routes::{create_router, AppState},
    services::recommendations::RecommendationSettings,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let pool = create_pool(&config.database_url).await?;
    sqlx::migrate!().run(&pool).await?;

    let state = Arc::new(AppState {
        store: Arc::new(PgArtworkStore::new(pool)),
        settings: RecommendationSettings {
            candidate_pool_limit: config.candidate_pool_limit,
            result_limit: config.recommendation_limit,
        },
        request_timeout: Duration::from_secs(config.request_timeout_secs),
    });

    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "Server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
