//! # Roster - User Account Service Library
//!
//! This is a facade crate that re-exports all public APIs from the account service components.
//! Use this crate to get access to signup, login, profile, update and delete in one place.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! roster = { path = "../roster" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Password`, `Account`, `Identity`, etc.
//! - **Repository traits**: `AccountStore`, `AuditLog`
//! - **Strategies**: `CredentialHasher`, `TokenIssuer`, `AuthValidator`
//! - **Use cases**: `SignupUseCase`, `LoginUseCase`, etc.
//! - **Adapters**: `PostgresAccountStore`, `Argon2Hasher`, `JwtIssuer`, etc.
//! - **Service**: `UsersService` - The main entry point for the account service

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use roster_core::*;
}

// Re-export most commonly used core types at the root level
pub use roster_core::{
    AccessToken, Account, AccountChanges, AccountError, AccountId, AccountProfile, AccountSummary,
    AuditAction, AuditEntry, Email, Identity, NewAccount, Password, PasswordHash,
};

// ============================================================================
// Repository Traits (Ports) and Strategies
// ============================================================================

/// Repository trait definitions
pub mod repositories {
    pub use roster_core::{AccountStore, AccountStoreError, AuditLog, AuditLogError};
}

pub use roster_core::{
    AccountStore, AccountStoreError, AuditLog, AuditLogError, AuthValidator, CostFactor,
    CredentialHasher, HashingError, TokenIssuer,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use roster_application::*;
}

pub use roster_application::{
    AccountUpdate, DeleteAccountUseCase, LoginUseCase, SignupUseCase, UpdateAccountUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Persistence implementations
    pub mod persistence {
        pub use roster_adapters::persistence::*;
    }

    /// Password hashing
    pub mod authentication {
        pub use roster_adapters::authentication::*;
    }

    /// JWT issuing and validation
    pub mod auth {
        pub use roster_adapters::auth_validation::*;
    }

    /// Configuration
    pub mod config {
        pub use roster_adapters::config::*;
    }
}

pub use roster_adapters::{
    auth_validation::{JwtAuthConfig, JwtIssuer, LocalJwtValidator, TokenAuthError},
    authentication::Argon2Hasher,
    config::RosterSettings,
    persistence::{HashMapAccountStore, PostgresAccountStore, PostgresAuditLog, VecAuditLog},
};

// ============================================================================
// HTTP Layer
// ============================================================================

/// Axum routes, guard middleware and API errors
pub mod http_api {
    pub use roster_axum::*;
}

pub use roster_axum::{AccountApiError, AccountState};

// ============================================================================
// Users Service (Main Entry Point)
// ============================================================================

/// Main users service
pub use roster_service::{UsersService, configure_postgresql, get_postgres_pool};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing repository traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use http;
