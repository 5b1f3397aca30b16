pub mod auth_validation;
pub mod authentication;
pub mod config;
pub mod persistence;
