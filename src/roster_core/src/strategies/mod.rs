pub mod auth_validator;
pub mod credential_hasher;
pub mod token_issuer;
