use std::fmt;

use super::account::AccountId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditAction {
    Signup,
    Login,
    Update,
}

impl AuditAction {
    pub fn as_str(self) -> &'static str {
        match self {
            AuditAction::Signup => "signup",
            AuditAction::Login => "login",
            AuditAction::Update => "update",
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Append-only record of an account action, tied to the account by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEntry {
    pub action: AuditAction,
    pub remarks: String,
    pub account_id: AccountId,
}

impl AuditEntry {
    pub fn new(action: AuditAction, remarks: impl Into<String>, account_id: AccountId) -> Self {
        Self {
            action,
            remarks: remarks.into(),
            account_id,
        }
    }
}
