use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use roster_adapters::auth_validation::TokenAuthError;
use roster_application::{DeleteAccountError, LoginError, SignupError, UpdateAccountError};
use roster_core::{AccountError, AccountStoreError, HashingError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum AccountApiError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Account already exists")]
    AccountAlreadyExists,

    #[error("Account not found")]
    AccountNotFound,

    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl AccountApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AccountApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AccountApiError::AccountAlreadyExists => StatusCode::CONFLICT,
            AccountApiError::AccountNotFound => StatusCode::NOT_FOUND,
            AccountApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AccountApiError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AccountApiError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        // Internal details stay in the logs.
        let error = match &self {
            AccountApiError::UnexpectedError(e) => {
                tracing::error!(error = %e, "Request failed with an internal error");
                String::from("Internal server error")
            }
            _ => self.to_string(),
        };

        (status_code, Json(ErrorResponse { error })).into_response()
    }
}

impl From<AccountError> for AccountApiError {
    fn from(error: AccountError) -> Self {
        AccountApiError::InvalidInput(error.to_string())
    }
}

impl From<JsonRejection> for AccountApiError {
    fn from(rejection: JsonRejection) -> Self {
        AccountApiError::InvalidInput(rejection.body_text())
    }
}

impl From<PathRejection> for AccountApiError {
    fn from(rejection: PathRejection) -> Self {
        AccountApiError::InvalidInput(rejection.body_text())
    }
}

impl From<AccountStoreError> for AccountApiError {
    fn from(error: AccountStoreError) -> Self {
        match error {
            AccountStoreError::AccountAlreadyExists => AccountApiError::AccountAlreadyExists,
            AccountStoreError::AccountNotFound => AccountApiError::AccountNotFound,
            AccountStoreError::UnexpectedError(e) => AccountApiError::UnexpectedError(e),
        }
    }
}

impl From<HashingError> for AccountApiError {
    fn from(error: HashingError) -> Self {
        AccountApiError::UnexpectedError(error.to_string())
    }
}

impl From<TokenAuthError> for AccountApiError {
    fn from(error: TokenAuthError) -> Self {
        match error {
            TokenAuthError::MissingToken
            | TokenAuthError::BadSignature
            | TokenAuthError::Expired
            | TokenAuthError::Malformed(_) => AccountApiError::Unauthorized(error.to_string()),
            TokenAuthError::UnexpectedError(e) => AccountApiError::UnexpectedError(e),
        }
    }
}

impl From<SignupError> for AccountApiError {
    fn from(error: SignupError) -> Self {
        match error {
            SignupError::AccountStoreError(e) => e.into(),
            SignupError::HashingError(e) => e.into(),
        }
    }
}

impl From<LoginError> for AccountApiError {
    fn from(error: LoginError) -> Self {
        match error {
            LoginError::AccountStoreError(e) => e.into(),
            LoginError::IncorrectPassword => AccountApiError::Unauthorized(error.to_string()),
            LoginError::TokenError(e) => AccountApiError::UnexpectedError(e),
        }
    }
}

impl From<UpdateAccountError> for AccountApiError {
    fn from(error: UpdateAccountError) -> Self {
        match error {
            UpdateAccountError::AccountStoreError(e) => e.into(),
            UpdateAccountError::HashingError(e) => e.into(),
        }
    }
}

impl From<DeleteAccountError> for AccountApiError {
    fn from(error: DeleteAccountError) -> Self {
        match error {
            DeleteAccountError::AccountStoreError(e) => e.into(),
        }
    }
}
