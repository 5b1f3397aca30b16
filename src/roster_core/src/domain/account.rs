use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{email::Email, password::PasswordHash};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountError {
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("Password must not be empty")]
    EmptyPassword,
}

/// Store-assigned account identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(i64);

impl AccountId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Full account record as held by the store, including the password hash.
///
/// Only the login path ever needs the hash; everything that leaves the
/// service goes through [`AccountSummary`] or [`AccountProfile`].
#[derive(Debug, Clone)]
pub struct Account {
    pub id: AccountId,
    pub email: Email,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub password_hash: PasswordHash,
}

impl Account {
    pub fn summary(&self) -> AccountSummary {
        AccountSummary {
            id: self.id,
            email: self.email.as_str().to_owned(),
        }
    }

    pub fn profile(&self) -> AccountProfile {
        AccountProfile {
            id: self.id,
            email: self.email.as_str().to_owned(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        }
    }

    /// Apply a partial update in place. Absent fields are left untouched.
    pub fn apply(&mut self, changes: AccountChanges) {
        if let Some(email) = changes.email {
            self.email = email;
        }
        if let Some(first_name) = changes.first_name {
            self.first_name = Some(first_name);
        }
        if let Some(last_name) = changes.last_name {
            self.last_name = Some(last_name);
        }
        if let Some(password_hash) = changes.password_hash {
            self.password_hash = password_hash;
        }
    }
}

/// Fields required to create an account. The id is assigned by the store.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub email: Email,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub password_hash: PasswordHash,
}

/// Partial update: `None` means "leave unchanged", never "clear".
#[derive(Debug, Clone, Default)]
pub struct AccountChanges {
    pub email: Option<Email>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub password_hash: Option<PasswordHash>,
}

impl AccountChanges {
    pub fn is_empty(&self) -> bool {
        self.changed_fields().is_empty()
    }

    /// Names of the supplied fields, for audit remarks.
    pub fn changed_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.email.is_some() {
            fields.push("email");
        }
        if self.first_name.is_some() {
            fields.push("firstName");
        }
        if self.last_name.is_some() {
            fields.push("lastName");
        }
        if self.password_hash.is_some() {
            fields.push("password");
        }
        fields
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSummary {
    pub id: AccountId,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountProfile {
    pub id: AccountId,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}
