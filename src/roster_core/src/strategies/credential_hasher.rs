use async_trait::async_trait;
use thiserror::Error;

use crate::domain::password::{Password, PasswordHash};

/// Tunable hashing expense. Embedded in every hash it produces, so raising it
/// later does not invalidate stored hashes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostFactor(u32);

impl CostFactor {
    pub const fn new(cost: u32) -> Self {
        Self(cost)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

#[derive(Debug, Error)]
pub enum HashingError {
    #[error("Invalid cost factor: {0}")]
    InvalidCost(String),
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

/// One-way salted password hashing.
#[async_trait]
pub trait CredentialHasher: Clone + Send + Sync + 'static {
    /// Hash with a fresh random salt. Hashing the same password twice yields
    /// two different values.
    async fn hash(
        &self,
        password: &Password,
        cost: CostFactor,
    ) -> Result<PasswordHash, HashingError>;

    /// Recompute with the parameters embedded in `hash` and compare in
    /// constant time. Malformed hashes verify as `false`.
    async fn verify(&self, password: &Password, hash: &PasswordHash) -> bool;
}
