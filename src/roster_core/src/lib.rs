pub mod domain;
pub mod ports;
pub mod strategies;

// Re-export commonly used types for convenience
pub use domain::{
    account::{
        Account, AccountChanges, AccountError, AccountId, AccountProfile, AccountSummary,
        NewAccount,
    },
    audit::{AuditAction, AuditEntry},
    email::Email,
    identity::{AccessToken, Identity},
    password::{Password, PasswordHash},
};

pub use ports::repositories::{AccountStore, AccountStoreError, AuditLog, AuditLogError};

pub use strategies::{
    auth_validator::AuthValidator,
    credential_hasher::{CostFactor, CredentialHasher, HashingError},
    token_issuer::TokenIssuer,
};
