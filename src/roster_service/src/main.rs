use color_eyre::eyre::{Result, eyre};
use roster_adapters::{
    auth_validation::{JwtIssuer, LocalJwtValidator},
    config::RosterSettings,
    persistence::{PostgresAccountStore, PostgresAuditLog},
};
use roster_axum::AccountState;
use roster_service::{UsersService, configure_postgresql, init_tracing};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let settings = RosterSettings::load()?;

    let postgres = settings
        .postgres
        .as_ref()
        .ok_or_else(|| eyre!("DATABASE_URL or ROSTER_POSTGRES__URL must be set"))?;
    let pg_pool = configure_postgresql(postgres).await?;

    let token_issuer = JwtIssuer::new(settings.jwt_config());
    let state = AccountState::new(
        PostgresAccountStore::new(pg_pool.clone()),
        PostgresAuditLog::new(pg_pool),
        settings.hasher(),
        token_issuer.clone(),
        settings.cost(),
    );

    let users_service = UsersService::new(state, LocalJwtValidator::new(token_issuer));

    let listener = TcpListener::bind(&settings.app.address).await?;
    tracing::info!("Starting users service...");

    users_service
        .run_standalone(listener, settings.app.allowed_origins.clone())
        .await?;

    Ok(())
}
