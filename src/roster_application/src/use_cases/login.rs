use roster_core::{
    AccessToken, AccountStore, AccountStoreError, AuditAction, AuditEntry, AuditLog,
    CredentialHasher, Email, Password, TokenIssuer,
};

use super::record_audit;

/// Error types specific to login use case
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("Account store error: {0}")]
    AccountStoreError(#[from] AccountStoreError),
    #[error("Incorrect password")]
    IncorrectPassword,
    #[error("Failed to issue access token: {0}")]
    TokenError(String),
}

/// Login use case - verifies credentials and issues an access token
pub struct LoginUseCase<S, A, H, T> {
    account_store: S,
    audit_log: A,
    hasher: H,
    token_issuer: T,
}

impl<S, A, H, T> LoginUseCase<S, A, H, T>
where
    S: AccountStore,
    A: AuditLog,
    H: CredentialHasher,
    T: TokenIssuer,
{
    pub fn new(account_store: S, audit_log: A, hasher: H, token_issuer: T) -> Self {
        Self {
            account_store,
            audit_log,
            hasher,
            token_issuer,
        }
    }

    /// Execute the login use case
    ///
    /// # Returns
    /// An access token bound to the account's id and email, or
    /// `AccountNotFound` for an unknown email, or `IncorrectPassword`.
    #[tracing::instrument(name = "LoginUseCase::execute", skip(self, password))]
    pub async fn execute(&self, email: Email, password: Password) -> Result<AccessToken, LoginError> {
        let account = self
            .account_store
            .find_by_email(&email)
            .await?
            .ok_or(AccountStoreError::AccountNotFound)?;

        if !self.hasher.verify(&password, &account.password_hash).await {
            return Err(LoginError::IncorrectPassword);
        }

        let token = self
            .token_issuer
            .issue(account.id, account.email.as_str())
            .map_err(|e| LoginError::TokenError(e.to_string()))?;

        record_audit(
            &self.audit_log,
            AuditEntry::new(AuditAction::Login, "logged in", account.id),
        )
        .await;

        Ok(token)
    }
}
