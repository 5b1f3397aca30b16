use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use roster_application::SignupUseCase;
use roster_core::{AccountStore, AuditLog, CredentialHasher, Email, Password, TokenIssuer};
use secrecy::Secret;
use serde::Deserialize;

use crate::{error::AccountApiError, state::AccountState};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub email: Secret<String>,
    pub password: Secret<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

#[tracing::instrument(name = "Signup", skip_all)]
pub async fn signup<S, A, H, T>(
    State(state): State<AccountState<S, A, H, T>>,
    payload: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AccountApiError>
where
    S: AccountStore,
    A: AuditLog,
    H: CredentialHasher,
    T: TokenIssuer,
{
    let Json(request) = payload?;
    let email = Email::try_from(request.email)?;
    let password = Password::try_from(request.password)?;

    let use_case =
        SignupUseCase::new(state.account_store, state.audit_log, state.hasher, state.cost);
    let summary = use_case
        .execute(email, password, request.first_name, request.last_name)
        .await?;

    Ok((StatusCode::CREATED, Json(summary)))
}
