pub mod helpers;
pub mod tracing;
pub mod users_service;

pub use helpers::{configure_postgresql, get_postgres_pool, init_tracing};
pub use users_service::UsersService;
