use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use roster_core::{
    Account, AccountChanges, AccountId, AccountProfile, AccountStore, AccountStoreError,
    AccountSummary, AuditEntry, Email, NewAccount,
};

use super::vec_audit_log::VecAuditLog;

#[derive(Default)]
pub(crate) struct Accounts {
    by_id: HashMap<AccountId, Account>,
    ids_by_email: HashMap<Email, AccountId>,
    last_id: i64,
    pub(crate) audit_entries: Vec<AuditEntry>,
}

impl Accounts {
    pub(crate) fn contains(&self, id: AccountId) -> bool {
        self.by_id.contains_key(&id)
    }
}

/// In-memory account directory. Ids start at 1 and are never reused.
///
/// Email uniqueness is checked under the write lock, so concurrent signups
/// with the same email cannot both succeed. Deleting an account also drops
/// the entries of any [`VecAuditLog`] built from this store.
#[derive(Default, Clone)]
pub struct HashMapAccountStore {
    accounts: Arc<RwLock<Accounts>>,
}

impl HashMapAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn shared(&self) -> Arc<RwLock<Accounts>> {
        self.accounts.clone()
    }

    /// Audit log backed by this store's state.
    pub fn audit_log(&self) -> VecAuditLog {
        VecAuditLog::new(self)
    }
}

#[async_trait::async_trait]
impl AccountStore for HashMapAccountStore {
    async fn find_by_email(&self, email: &Email) -> Result<Option<Account>, AccountStoreError> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .ids_by_email
            .get(email)
            .and_then(|id| accounts.by_id.get(id))
            .cloned())
    }

    async fn find_by_id(&self, id: AccountId) -> Result<Option<Account>, AccountStoreError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.by_id.get(&id).cloned())
    }

    async fn create(&self, account: NewAccount) -> Result<AccountSummary, AccountStoreError> {
        let mut accounts = self.accounts.write().await;
        if accounts.ids_by_email.contains_key(&account.email) {
            return Err(AccountStoreError::AccountAlreadyExists);
        }

        accounts.last_id += 1;
        let account = Account {
            id: AccountId::new(accounts.last_id),
            email: account.email,
            first_name: account.first_name,
            last_name: account.last_name,
            password_hash: account.password_hash,
        };

        let summary = account.summary();
        accounts
            .ids_by_email
            .insert(account.email.clone(), account.id);
        accounts.by_id.insert(account.id, account);
        Ok(summary)
    }

    async fn update(
        &self,
        id: AccountId,
        changes: AccountChanges,
    ) -> Result<AccountProfile, AccountStoreError> {
        let mut accounts = self.accounts.write().await;
        let current_email = accounts
            .by_id
            .get(&id)
            .map(|a| a.email.clone())
            .ok_or(AccountStoreError::AccountNotFound)?;

        if let Some(new_email) = changes.email.as_ref().filter(|e| **e != current_email) {
            if accounts.ids_by_email.contains_key(new_email) {
                return Err(AccountStoreError::AccountAlreadyExists);
            }
            accounts.ids_by_email.remove(&current_email);
            accounts.ids_by_email.insert(new_email.clone(), id);
        }

        let account = accounts
            .by_id
            .get_mut(&id)
            .ok_or(AccountStoreError::AccountNotFound)?;
        account.apply(changes);
        Ok(account.profile())
    }

    async fn delete(&self, id: AccountId) -> Result<AccountSummary, AccountStoreError> {
        let mut accounts = self.accounts.write().await;
        let account = accounts
            .by_id
            .remove(&id)
            .ok_or(AccountStoreError::AccountNotFound)?;
        accounts.ids_by_email.remove(&account.email);
        accounts.audit_entries.retain(|e| e.account_id != id);
        Ok(account.summary())
    }
}
