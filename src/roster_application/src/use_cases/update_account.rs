use roster_core::{
    AccountChanges, AccountId, AccountProfile, AccountStore, AccountStoreError, AuditAction,
    AuditEntry, AuditLog, CostFactor, CredentialHasher, Email, HashingError, Password,
};

use super::record_audit;

/// Error types for update account use case
#[derive(Debug, thiserror::Error)]
pub enum UpdateAccountError {
    #[error("Account store error: {0}")]
    AccountStoreError(#[from] AccountStoreError),
    #[error("Password hashing error: {0}")]
    HashingError(#[from] HashingError),
}

/// Requested changes, with the password still in plaintext.
#[derive(Debug, Clone, Default)]
pub struct AccountUpdate {
    pub email: Option<Email>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub password: Option<Password>,
}

/// Update account use case - partial update of an existing account
pub struct UpdateAccountUseCase<S, A, H> {
    account_store: S,
    audit_log: A,
    hasher: H,
    cost: CostFactor,
}

impl<S, A, H> UpdateAccountUseCase<S, A, H>
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

    /// Execute the update account use case
    ///
    /// Only supplied fields are written. A supplied email that differs from
    /// the current one must not belong to another account.
    #[tracing::instrument(name = "UpdateAccountUseCase::execute", skip(self, update))]
    pub async fn execute(
        &self,
        id: AccountId,
        update: AccountUpdate,
    ) -> Result<AccountProfile, UpdateAccountError> {
        let existing = self
            .account_store
            .find_by_id(id)
            .await?
            .ok_or(AccountStoreError::AccountNotFound)?;

        if let Some(email) = update.email.as_ref().filter(|e| **e != existing.email) {
            if let Some(holder) = self.account_store.find_by_email(email).await? {
                if holder.id != id {
                    return Err(AccountStoreError::AccountAlreadyExists.into());
                }
            }
        }

        let password_hash = match &update.password {
            Some(password) => Some(self.hasher.hash(password, self.cost).await?),
            None => None,
        };

        let changes = AccountChanges {
            email: update.email,
            first_name: update.first_name,
            last_name: update.last_name,
            password_hash,
        };

        if changes.is_empty() {
            return Ok(existing.profile());
        }

        let remarks = format!("updated {}", changes.changed_fields().join(", "));
        let profile = self.account_store.update(id, changes).await?;

        record_audit(
            &self.audit_log,
            AuditEntry::new(AuditAction::Update, remarks, id),
        )
        .await;

        Ok(profile)
    }
}
