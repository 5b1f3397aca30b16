use std::sync::Arc;
use tokio::sync::RwLock;

use roster_core::{AccountId, AuditEntry, AuditLog, AuditLogError};

use super::hashmap_account_store::{Accounts, HashMapAccountStore};

/// In-memory, append-only audit log sharing state with a
/// [`HashMapAccountStore`].
///
/// Entries must reference an existing account and are dropped when that
/// account is deleted, matching the `audit_logs.user_id` foreign key.
#[derive(Clone)]
pub struct VecAuditLog {
    accounts: Arc<RwLock<Accounts>>,
}

impl VecAuditLog {
    pub fn new(store: &HashMapAccountStore) -> Self {
        Self {
            accounts: store.shared(),
        }
    }

    pub async fn entries(&self) -> Vec<AuditEntry> {
        self.accounts.read().await.audit_entries.clone()
    }

    pub async fn entries_for(&self, account_id: AccountId) -> Vec<AuditEntry> {
        self.accounts
            .read()
            .await
            .audit_entries
            .iter()
            .filter(|e| e.account_id == account_id)
            .cloned()
            .collect()
    }
}

#[async_trait::async_trait]
impl AuditLog for VecAuditLog {
    async fn record(&self, entry: AuditEntry) -> Result<(), AuditLogError> {
        let mut accounts = self.accounts.write().await;
        if !accounts.contains(entry.account_id) {
            return Err(AuditLogError::DatabaseError(format!(
                "account {} does not exist",
                entry.account_id
            )));
        }
        accounts.audit_entries.push(entry);
        Ok(())
    }
}
