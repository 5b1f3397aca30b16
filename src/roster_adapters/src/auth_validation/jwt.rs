use chrono::{DateTime, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use roster_core::{AccessToken, AccountId, Identity, TokenIssuer};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone)]
pub struct JwtAuthConfig {
    pub jwt_secret: Secret<String>,
    pub token_ttl_in_seconds: i64,
}

impl JwtAuthConfig {
    pub fn as_bytes(&self) -> &[u8] {
        self.jwt_secret.expose_secret().as_bytes()
    }
}

#[derive(Debug, Error)]
pub enum TokenAuthError {
    #[error("Missing token")]
    MissingToken,
    #[error("Invalid token signature")]
    BadSignature,
    #[error("Token has expired")]
    Expired,
    #[error("Malformed token: {0}")]
    Malformed(String),
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

/// Signed claim set. `sub` is the account id rendered as a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

impl TryFrom<Claims> for Identity {
    type Error = TokenAuthError;

    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        let id = claims
            .sub
            .parse::<i64>()
            .map_err(|_| TokenAuthError::Malformed(format!("non-numeric subject {}", claims.sub)))?;

        Ok(Identity {
            id: AccountId::new(id),
            email: claims.email,
            issued_at: claims.iat,
            expires_at: claims.exp,
        })
    }
}

// Create JWT auth token valid for `token_ttl_seconds` from `issued_at`
pub fn generate_auth_token(
    id: AccountId,
    email: &str,
    issued_at: DateTime<Utc>,
    token_ttl_seconds: i64,
    secret: &[u8],
) -> Result<String, TokenAuthError> {
    let delta = chrono::Duration::try_seconds(token_ttl_seconds).ok_or(
        TokenAuthError::UnexpectedError("Failed to create auth token duration".to_string()),
    )?;

    let exp = issued_at
        .checked_add_signed(delta)
        .ok_or(TokenAuthError::UnexpectedError(
            "Duration out of range".to_string(),
        ))?
        .timestamp();

    let claims = Claims {
        sub: id.to_string(),
        email: email.to_owned(),
        iat: issued_at.timestamp(),
        exp,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret),
    )
    .map_err(|e| TokenAuthError::UnexpectedError(e.to_string()))
}

// Check signature and expiry; a token is valid strictly before `exp`
pub fn validate_auth_token(
    token: &str,
    secret: &[u8],
    now: DateTime<Utc>,
) -> Result<Claims, TokenAuthError> {
    // Expiry is checked against `now` below, not the system clock.
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false;
    validation.leeway = 0;

    let claims = decode::<Claims>(token, &DecodingKey::from_secret(secret), &validation)
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::InvalidSignature => TokenAuthError::BadSignature,
            ErrorKind::ExpiredSignature => TokenAuthError::Expired,
            _ => TokenAuthError::Malformed(e.to_string()),
        })?;

    if now.timestamp() >= claims.exp {
        return Err(TokenAuthError::Expired);
    }

    Ok(claims)
}

/// HS256 token issuer backed by a secret fixed at construction.
#[derive(Clone)]
pub struct JwtIssuer {
    config: JwtAuthConfig,
}

impl JwtIssuer {
    pub fn new(config: JwtAuthConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &JwtAuthConfig {
        &self.config
    }

    pub fn issue_at(
        &self,
        id: AccountId,
        email: &str,
        issued_at: DateTime<Utc>,
    ) -> Result<AccessToken, TokenAuthError> {
        generate_auth_token(
            id,
            email,
            issued_at,
            self.config.token_ttl_in_seconds,
            self.config.as_bytes(),
        )
        .map(AccessToken::from)
    }

    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<Identity, TokenAuthError> {
        validate_auth_token(token, self.config.as_bytes(), now)?.try_into()
    }
}

impl TokenIssuer for JwtIssuer {
    type Error = TokenAuthError;

    fn issue(&self, id: AccountId, email: &str) -> Result<AccessToken, Self::Error> {
        self.issue_at(id, email, Utc::now())
    }

    fn verify(&self, token: &str) -> Result<Identity, Self::Error> {
        self.verify_at(token, Utc::now())
    }
}
