pub mod jwt;
pub mod local_jwt_validator;

pub use jwt::{
    Claims, JwtAuthConfig, JwtIssuer, TokenAuthError, generate_auth_token, validate_auth_token,
};
pub use local_jwt_validator::{LocalJwtValidator, extract_bearer_token};
