use anyhow::{Context, Result};
use api::{handler::AppRouter, state::AppState};
use dotenv::dotenv;
use shared::{
    MIGRATOR,
    config::{Config, ConnectionManager},
    utils::Logger,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let config = Config::init().context("Failed to load configuration")?;

    let _logger = Logger::new("api", config.is_dev);

    let pool = ConnectionManager::new_pool(
        &config.database_url,
        config.max_connections,
        config.conn_max_lifetime,
    )
    .await
    .context("Failed to initialize database pool")?;

    if config.run_migrations {
        MIGRATOR
            .run(&pool)
            .await
            .context("Failed to run database migrations")?;
        info!("🗃️ Database migrations applied");
    }

    let state = AppState::new(pool.clone(), config.version.clone());

    info!("🚀 Starting warikan api v{}", config.version);

    AppRouter::serve(&config, state)
        .await
        .context("Failed to start server")?;

    info!("Shutting down, closing database pool");
    pool.close().await;

    Ok(())
}
