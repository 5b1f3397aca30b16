use std::collections::HashMap;

use config::{Config, ConfigError, Environment, File};
use http::HeaderValue;
use roster_core::CostFactor;
use secrecy::Secret;
use serde::Deserialize;

use super::constants::{
    DEFAULT_HASH_COST, DEFAULT_HASH_MEMORY_KIB, DEFAULT_MAX_DB_CONNECTIONS,
    DEFAULT_TOKEN_TTL_SECONDS, SETTINGS_FILE,
    env::{DATABASE_URL_ENV_VAR, JWT_SECRET_ENV_VAR, SETTINGS_ENV_PREFIX},
    prod,
};
use crate::auth_validation::JwtAuthConfig;
use crate::authentication::Argon2Hasher;

/// Service settings, layered from (lowest to highest priority):
/// built-in defaults, the optional `config/settings.json` file,
/// `ROSTER_*` environment variables (`__` separates nested keys) and the
/// well-known `JWT_SECRET` / `DATABASE_URL` variables.
#[derive(Debug, Clone, Deserialize)]
pub struct RosterSettings {
    pub app: AppSettings,
    pub jwt: JwtSettings,
    pub hashing: HashingSettings,
    pub postgres: Option<PostgresSettings>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    pub address: String,
    #[serde(default)]
    pub allowed_origins: Option<AllowedOrigins>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JwtSettings {
    pub secret: Secret<String>,
    pub time_to_live: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HashingSettings {
    pub cost: u32,
    pub memory_kib: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostgresSettings {
    pub url: Secret<String>,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_max_connections() -> u32 {
    DEFAULT_MAX_DB_CONNECTIONS
}

impl RosterSettings {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::build(Some(SETTINGS_FILE), std::env::vars().collect())
    }

    /// Builds settings from an explicit variable map instead of the process
    /// environment.
    pub fn build(
        settings_file: Option<&str>,
        vars: HashMap<String, String>,
    ) -> Result<Self, ConfigError> {
        let jwt_secret = vars.get(JWT_SECRET_ENV_VAR).cloned();
        let database_url = vars.get(DATABASE_URL_ENV_VAR).cloned();

        let mut builder = Config::builder()
            .set_default("app.address", prod::APP_ADDRESS)?
            .set_default("jwt.time_to_live", DEFAULT_TOKEN_TTL_SECONDS)?
            .set_default("hashing.cost", DEFAULT_HASH_COST)?
            .set_default("hashing.memory_kib", DEFAULT_HASH_MEMORY_KIB)?;

        if let Some(file) = settings_file {
            builder = builder.add_source(File::with_name(file).required(false));
        }

        builder
            .add_source(
                Environment::with_prefix(SETTINGS_ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("app.allowed_origins")
                    .try_parsing(true)
                    .source(Some(vars)),
            )
            .set_override_option("jwt.secret", jwt_secret)?
            .set_override_option("postgres.url", database_url)?
            .build()?
            .try_deserialize()
    }

    pub fn jwt_config(&self) -> JwtAuthConfig {
        JwtAuthConfig {
            jwt_secret: self.jwt.secret.clone(),
            token_ttl_in_seconds: self.jwt.time_to_live,
        }
    }

    pub fn cost(&self) -> CostFactor {
        CostFactor::new(self.hashing.cost)
    }

    pub fn hasher(&self) -> Argon2Hasher {
        Argon2Hasher::new(self.hashing.memory_kib)
    }
}

/// CORS allow-list, matched exactly against the request's `Origin` header.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct AllowedOrigins(Vec<String>);

impl AllowedOrigins {
    pub fn new(origins: Vec<String>) -> Self {
        Self(origins)
    }

    pub fn contains(&self, origin: &HeaderValue) -> bool {
        self.0.iter().any(|o| o.as_bytes() == origin.as_bytes())
    }
}
