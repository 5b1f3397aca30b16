pub mod constants;
pub mod settings;

pub use constants::*;
pub use settings::{
    AllowedOrigins, AppSettings, HashingSettings, JwtSettings, PostgresSettings, RosterSettings,
};
