use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};
use roster_application::DeleteAccountUseCase;
use roster_core::{
    AccountId, AccountStore, AccountSummary, AuditLog, CredentialHasher, TokenIssuer,
};

use crate::{error::AccountApiError, state::AccountState};

#[tracing::instrument(name = "Delete account", skip_all)]
pub async fn delete_account<S, A, H, T>(
    State(state): State<AccountState<S, A, H, T>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<AccountSummary>, AccountApiError>
where
    S: AccountStore,
    A: AuditLog,
    H: CredentialHasher,
    T: TokenIssuer,
{
    let Path(id) = id?;
    let use_case = DeleteAccountUseCase::new(state.account_store);
    let removed = use_case.execute(AccountId::new(id)).await?;

    Ok(Json(removed))
}
