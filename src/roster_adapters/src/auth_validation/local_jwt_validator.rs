use async_trait::async_trait;
use http::{HeaderMap, header::AUTHORIZATION};
use roster_core::{AuthValidator, Identity, TokenIssuer};

use super::jwt::{JwtIssuer, TokenAuthError};

/// Validates `Authorization: Bearer <jwt>` headers locally, with no store
/// lookups. Issued tokens stay valid until they expire.
#[derive(Clone)]
pub struct LocalJwtValidator {
    issuer: JwtIssuer,
}

impl LocalJwtValidator {
    pub fn new(issuer: JwtIssuer) -> Self {
        Self { issuer }
    }
}

#[async_trait]
impl AuthValidator for LocalJwtValidator {
    type Claims = Identity;
    type RequestParts = http::request::Parts;
    type Error = TokenAuthError;

    async fn validate(&self, parts: &Self::RequestParts) -> Result<Self::Claims, Self::Error> {
        let token = extract_bearer_token(&parts.headers)?;

        self.issuer.verify(token)
    }
}

pub fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, TokenAuthError> {
    let value = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(TokenAuthError::MissingToken)?;

    match value.split_once(' ') {
        Some((scheme, token)) if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() => {
            Ok(token.trim())
        }
        _ => Err(TokenAuthError::MissingToken),
    }
}
