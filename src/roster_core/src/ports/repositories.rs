use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    account::{Account, AccountChanges, AccountId, AccountProfile, AccountSummary, NewAccount},
    audit::AuditEntry,
    email::Email,
};

// AccountStore port trait and errors
#[derive(Debug, Error)]
pub enum AccountStoreError {
    #[error("Account already exists")]
    AccountAlreadyExists,
    #[error("Account not found")]
    AccountNotFound,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for AccountStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::AccountAlreadyExists, Self::AccountAlreadyExists)
                | (Self::AccountNotFound, Self::AccountNotFound)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

/// Persistent directory of accounts.
///
/// `create` and `update` must reject a duplicate email with
/// [`AccountStoreError::AccountAlreadyExists`] on their own; callers may
/// pre-check with `find_by_email` but that check is not atomic with the write.
#[async_trait]
pub trait AccountStore: Clone + Send + Sync + 'static {
    async fn find_by_email(&self, email: &Email) -> Result<Option<Account>, AccountStoreError>;
    async fn find_by_id(&self, id: AccountId) -> Result<Option<Account>, AccountStoreError>;
    async fn create(&self, account: NewAccount) -> Result<AccountSummary, AccountStoreError>;
    async fn update(
        &self,
        id: AccountId,
        changes: AccountChanges,
    ) -> Result<AccountProfile, AccountStoreError>;
    async fn delete(&self, id: AccountId) -> Result<AccountSummary, AccountStoreError>;
}

// AuditLog port trait and errors
#[derive(Debug, Error)]
pub enum AuditLogError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait AuditLog: Clone + Send + Sync + 'static {
    async fn record(&self, entry: AuditEntry) -> Result<(), AuditLogError>;
}
