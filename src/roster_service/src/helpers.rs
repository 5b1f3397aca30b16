use color_eyre::eyre::Result;
use roster_adapters::config::PostgresSettings;
use secrecy::ExposeSecret;
use sqlx::{PgPool, postgres::PgPoolOptions};
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Connect to PostgreSQL and run all pending migrations.
pub async fn configure_postgresql(settings: &PostgresSettings) -> Result<PgPool> {
    let pg_pool = get_postgres_pool(settings.url.expose_secret(), settings.max_connections).await?;

    sqlx::migrate!("../../migrations").run(&pg_pool).await?;

    Ok(pg_pool)
}

pub async fn get_postgres_pool(url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(url)
        .await
}

/// Install the global subscriber: `RUST_LOG` filter (default `info`),
/// compact formatting and span traces for `color_eyre` reports.
pub fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
