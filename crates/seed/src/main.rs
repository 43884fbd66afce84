use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gameportal_seed::SeedConfig;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gameportal_seed=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = SeedConfig::from_env()?;
    tracing::info!(?config, "Loaded seed configuration");

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = gameportal_db::create_pool(&database_url)
        .await
        .context("failed to connect to database")?;
    gameportal_db::run_migrations(&pool)
        .await
        .context("failed to run database migrations")?;
    tracing::info!("Database ready");

    gameportal_seed::run(&pool, &config).await?;

    pool.close().await;
    Ok(())
}
