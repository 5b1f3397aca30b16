use roster_core::{AccountId, AccountStore, AccountStoreError, AccountSummary};

/// Error types for delete account use case
#[derive(Debug, thiserror::Error)]
pub enum DeleteAccountError {
    #[error("Account store error: {0}")]
    AccountStoreError(#[from] AccountStoreError),
}

/// Delete account use case - removes an account and returns what was removed
pub struct DeleteAccountUseCase<S>
where
    S: AccountStore,
{
    account_store: S,
}

impl<S> DeleteAccountUseCase<S>
where
    S: AccountStore,
{
    pub fn new(account_store: S) -> Self {
        Self { account_store }
    }

    /// Execute the delete account use case
    ///
    /// # Returns
    /// Id and email of the removed account, or `AccountNotFound`
    #[tracing::instrument(name = "DeleteAccountUseCase::execute", skip(self))]
    pub async fn execute(&self, id: AccountId) -> Result<AccountSummary, DeleteAccountError> {
        let removed = self.account_store.delete(id).await?;

        Ok(removed)
    }
}
