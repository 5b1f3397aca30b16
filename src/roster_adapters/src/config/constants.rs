pub mod env {
    pub const JWT_SECRET_ENV_VAR: &str = "JWT_SECRET";
    pub const DATABASE_URL_ENV_VAR: &str = "DATABASE_URL";
    pub const SETTINGS_ENV_PREFIX: &str = "ROSTER";
}

pub const SETTINGS_FILE: &str = "config/settings";

/// Argon2 time cost (iterations), not a bcrypt work factor. bcrypt's usual
/// cost of 10 would mean 2^10 rounds; Argon2 grows linearly in `t`, so a small
/// value paired with [`DEFAULT_HASH_MEMORY_KIB`] is the comparable setting.
pub const DEFAULT_HASH_COST: u32 = 2;
pub const DEFAULT_HASH_MEMORY_KIB: u32 = 15000;
pub const DEFAULT_TOKEN_TTL_SECONDS: i64 = 86_400;
pub const DEFAULT_MAX_DB_CONNECTIONS: u32 = 5;

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
}
