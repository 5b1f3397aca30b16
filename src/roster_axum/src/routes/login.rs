use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use roster_application::LoginUseCase;
use roster_core::{AccountStore, AuditLog, CredentialHasher, Email, Password, TokenIssuer};
use secrecy::Secret;
use serde::{Deserialize, Serialize};

use crate::{error::AccountApiError, state::AccountState};

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: Secret<String>,
    pub password: Secret<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
}

#[tracing::instrument(name = "Login", skip_all)]
pub async fn login<S, A, H, T>(
    State(state): State<AccountState<S, A, H, T>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, AccountApiError>
where
    S: AccountStore,
    A: AuditLog,
    H: CredentialHasher,
    T: TokenIssuer,
{
    let Json(request) = payload?;
    let email = Email::try_from(request.email)?;
    let password = Password::try_from(request.password)?;

    let use_case = LoginUseCase::new(
        state.account_store,
        state.audit_log,
        state.hasher,
        state.token_issuer,
    );
    let token = use_case.execute(email, password).await?;

    Ok(Json(LoginResponse {
        access_token: token.into_string(),
    }))
}
