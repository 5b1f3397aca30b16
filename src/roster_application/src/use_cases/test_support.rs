//! In-process doubles shared by the use case tests.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use roster_core::{
    AccessToken, Account, AccountChanges, AccountId, AccountProfile, AccountStore,
    AccountStoreError, AccountSummary, AuditEntry, AuditLog, AuditLogError, CostFactor,
    CredentialHasher, Email, HashingError, Identity, NewAccount, Password, PasswordHash,
    TokenIssuer,
};
use secrecy::{ExposeSecret, Secret};
use tokio::sync::RwLock;

pub fn email(raw: &str) -> Email {
    Email::try_from(raw.to_string()).unwrap()
}

pub fn password(raw: &str) -> Password {
    Password::try_from(Secret::new(raw.to_string())).unwrap()
}

#[derive(Default)]
struct Accounts {
    by_id: BTreeMap<AccountId, Account>,
    next_id: i64,
}

#[derive(Clone, Default)]
pub struct MockAccountStore {
    accounts: Arc<RwLock<Accounts>>,
}

impl MockAccountStore {
    pub async fn get(&self, id: AccountId) -> Option<Account> {
        self.accounts.read().await.by_id.get(&id).cloned()
    }
}

#[async_trait]
impl AccountStore for MockAccountStore {
    async fn find_by_email(&self, email: &Email) -> Result<Option<Account>, AccountStoreError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.by_id.values().find(|a| &a.email == email).cloned())
    }

    async fn find_by_id(&self, id: AccountId) -> Result<Option<Account>, AccountStoreError> {
        Ok(self.get(id).await)
    }

    async fn create(&self, account: NewAccount) -> Result<AccountSummary, AccountStoreError> {
        let mut accounts = self.accounts.write().await;
        if accounts.by_id.values().any(|a| a.email == account.email) {
            return Err(AccountStoreError::AccountAlreadyExists);
        }
        accounts.next_id += 1;
        let account = Account {
            id: AccountId::new(accounts.next_id),
            email: account.email,
            first_name: account.first_name,
            last_name: account.last_name,
            password_hash: account.password_hash,
        };
        let summary = account.summary();
        accounts.by_id.insert(account.id, account);
        Ok(summary)
    }

    async fn update(
        &self,
        id: AccountId,
        changes: AccountChanges,
    ) -> Result<AccountProfile, AccountStoreError> {
        let mut accounts = self.accounts.write().await;
        let account = accounts
            .by_id
            .get_mut(&id)
            .ok_or(AccountStoreError::AccountNotFound)?;
        account.apply(changes);
        Ok(account.profile())
    }

    async fn delete(&self, id: AccountId) -> Result<AccountSummary, AccountStoreError> {
        let mut accounts = self.accounts.write().await;
        accounts
            .by_id
            .remove(&id)
            .map(|a| a.summary())
            .ok_or(AccountStoreError::AccountNotFound)
    }
}

#[derive(Clone, Default)]
pub struct MockAuditLog {
    pub entries: Arc<RwLock<Vec<AuditEntry>>>,
}

#[async_trait]
impl AuditLog for MockAuditLog {
    async fn record(&self, entry: AuditEntry) -> Result<(), AuditLogError> {
        self.entries.write().await.push(entry);
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct FailingAuditLog;

#[async_trait]
impl AuditLog for FailingAuditLog {
    async fn record(&self, _entry: AuditEntry) -> Result<(), AuditLogError> {
        Err(AuditLogError::DatabaseError("audit table is gone".to_string()))
    }
}

/// Reversible "hash" with a counter salt, good enough to tell hashes apart.
#[derive(Clone, Default)]
pub struct MockHasher {
    salt: Arc<AtomicU64>,
}

#[async_trait]
impl CredentialHasher for MockHasher {
    async fn hash(
        &self,
        password: &Password,
        cost: CostFactor,
    ) -> Result<PasswordHash, HashingError> {
        let salt = self.salt.fetch_add(1, Ordering::SeqCst);
        Ok(PasswordHash::new(format!(
            "mock${}${}${}",
            cost.get(),
            salt,
            password.as_ref().expose_secret()
        )))
    }

    async fn verify(&self, password: &Password, hash: &PasswordHash) -> bool {
        hash.as_ref()
            .expose_secret()
            .splitn(4, '$')
            .nth(3)
            .is_some_and(|plain| plain == password.as_ref().expose_secret())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("bad token")]
pub struct MockTokenError;

#[derive(Clone, Default)]
pub struct MockIssuer;

impl TokenIssuer for MockIssuer {
    type Error = MockTokenError;

    fn issue(&self, id: AccountId, email: &str) -> Result<AccessToken, Self::Error> {
        Ok(AccessToken::from(format!("token:{id}:{email}")))
    }

    fn verify(&self, token: &str) -> Result<Identity, Self::Error> {
        let mut parts = token.splitn(3, ':');
        match (parts.next(), parts.next(), parts.next()) {
            (Some("token"), Some(id), Some(email)) => Ok(Identity {
                id: AccountId::new(id.parse().map_err(|_| MockTokenError)?),
                email: email.to_string(),
                issued_at: 0,
                expires_at: i64::MAX,
            }),
            _ => Err(MockTokenError),
        }
    }
}
