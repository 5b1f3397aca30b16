pub mod delete_account;
pub mod login;
pub mod signup;
pub mod update_account;

#[cfg(test)]
pub(crate) mod test_support;

use roster_core::{AuditEntry, AuditLog};

/// Best-effort audit write. A failure is logged and swallowed so it never
/// changes the outcome of the operation that produced the entry.
pub(crate) async fn record_audit<A: AuditLog>(audit_log: &A, entry: AuditEntry) {
    let action = entry.action;
    let account_id = entry.account_id;
    if let Err(e) = audit_log.record(entry).await {
        tracing::warn!(%action, %account_id, error = %e, "Failed to record audit entry");
    }
}
