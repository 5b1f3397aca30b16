use roster_core::{
    AccountStore, AccountStoreError, AccountSummary, AuditAction, AuditEntry, AuditLog,
    CostFactor, CredentialHasher, Email, HashingError, NewAccount, Password,
};

use super::record_audit;

/// Error types for signup use case
#[derive(Debug, thiserror::Error)]
pub enum SignupError {
    #[error("Account store error: {0}")]
    AccountStoreError(#[from] AccountStoreError),
    #[error("Password hashing error: {0}")]
    HashingError(#[from] HashingError),
}

/// Signup use case - handles account registration
pub struct SignupUseCase<S, A, H> {
    account_store: S,
    audit_log: A,
    hasher: H,
    cost: CostFactor,
}

impl<S, A, H> SignupUseCase<S, A, H>
where
    S: AccountStore,
    A: AuditLog,
    H: CredentialHasher,
{
    pub fn new(account_store: S, audit_log: A, hasher: H, cost: CostFactor) -> Self {
        Self {
            account_store,
            audit_log,
            hasher,
            cost,
        }
    }

    /// Execute the signup use case
    ///
    /// The existence check is a fast path only: the store rejects a duplicate
    /// email on `create` as well, and both surface as
    /// `AccountStoreError::AccountAlreadyExists`.
    ///
    /// # Returns
    /// The new account's id and email. The password hash is never returned.
    #[tracing::instrument(name = "SignupUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        email: Email,
        password: Password,
        first_name: Option<String>,
        last_name: Option<String>,
    ) -> Result<AccountSummary, SignupError> {
        if self.account_store.find_by_email(&email).await?.is_some() {
            return Err(AccountStoreError::AccountAlreadyExists.into());
        }

        let password_hash = self.hasher.hash(&password, self.cost).await?;

        let summary = self
            .account_store
            .create(NewAccount {
                email,
                first_name,
                last_name,
                password_hash,
            })
            .await?;

        record_audit(
            &self.audit_log,
            AuditEntry::new(AuditAction::Signup, "account created", summary.id),
        )
        .await;

        Ok(summary)
    }
}
