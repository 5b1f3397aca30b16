use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
};
use roster_application::{AccountUpdate, UpdateAccountUseCase};
use roster_core::{
    AccountId, AccountProfile, AccountStore, AuditLog, CredentialHasher, Email, Password,
    TokenIssuer,
};
use secrecy::Secret;
use serde::Deserialize;

use crate::{error::AccountApiError, state::AccountState};

/// Partial update: absent and `null` fields are left unchanged.
#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAccountRequest {
    #[serde(default)]
    pub email: Option<Secret<String>>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub password: Option<Secret<String>>,
}

impl TryFrom<UpdateAccountRequest> for AccountUpdate {
    type Error = AccountApiError;

    fn try_from(request: UpdateAccountRequest) -> Result<Self, Self::Error> {
        Ok(AccountUpdate {
            email: request.email.map(Email::try_from).transpose()?,
            first_name: request.first_name,
            last_name: request.last_name,
            password: request.password.map(Password::try_from).transpose()?,
        })
    }
}

#[tracing::instrument(name = "Update account", skip_all)]
pub async fn update_account<S, A, H, T>(
    State(state): State<AccountState<S, A, H, T>>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateAccountRequest>, JsonRejection>,
) -> Result<Json<AccountProfile>, AccountApiError>
where
    S: AccountStore,
    A: AuditLog,
    H: CredentialHasher,
    T: TokenIssuer,
{
    let Path(id) = id?;
    let Json(request) = payload?;
    let update = AccountUpdate::try_from(request)?;

    let use_case =
        UpdateAccountUseCase::new(state.account_store, state.audit_log, state.hasher, state.cost);
    let profile = use_case.execute(AccountId::new(id), update).await?;

    Ok(Json(profile))
}
