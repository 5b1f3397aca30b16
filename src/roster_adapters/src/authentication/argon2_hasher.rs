use argon2::{
    Algorithm, Argon2, Params, PasswordHash as PhcString, PasswordVerifier, Version,
    password_hash::{PasswordHasher, SaltString, rand_core},
};
use roster_core::{CostFactor, CredentialHasher, HashingError, Password, PasswordHash};
use secrecy::ExposeSecret;

use crate::config::constants::DEFAULT_HASH_MEMORY_KIB;

/// Argon2id password hasher.
///
/// The per-call [`CostFactor`] is the Argon2 time cost (iterations). Memory
/// cost is fixed per hasher. Algorithm, version, all three parameters and the
/// salt end up in the PHC string, so [`CredentialHasher::verify`] needs
/// nothing but the stored hash.
#[derive(Debug, Clone)]
pub struct Argon2Hasher {
    memory_kib: u32,
}

impl Argon2Hasher {
    pub fn new(memory_kib: u32) -> Self {
        Self { memory_kib }
    }

    fn hasher(&self, cost: CostFactor) -> Result<Argon2<'static>, HashingError> {
        let params = Params::new(self.memory_kib, cost.get(), 1, None)
            .map_err(|e| HashingError::InvalidCost(e.to_string()))?;
        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}

impl Default for Argon2Hasher {
    fn default() -> Self {
        Self::new(DEFAULT_HASH_MEMORY_KIB)
    }
}

#[async_trait::async_trait]
impl CredentialHasher for Argon2Hasher {
    #[tracing::instrument(name = "Computing password hash", skip_all)]
    async fn hash(
        &self,
        password: &Password,
        cost: CostFactor,
    ) -> Result<PasswordHash, HashingError> {
        let hasher = self.hasher(cost)?;
        let password = password.clone();
        let current_span: tracing::Span = tracing::Span::current();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(move || {
                let salt: SaltString = SaltString::generate(rand_core::OsRng);
                hasher
                    .hash_password(password.as_ref().expose_secret().as_bytes(), &salt)
                    .map(|h| PasswordHash::new(h.to_string()))
                    .map_err(|e| HashingError::UnexpectedError(e.to_string()))
            })
        })
        .await
        .map_err(|e| HashingError::UnexpectedError(e.to_string()))?
    }

    #[tracing::instrument(name = "Verify password hash", skip_all)]
    async fn verify(&self, password: &Password, hash: &PasswordHash) -> bool {
        let password = password.clone();
        let hash = hash.clone();
        let current_span: tracing::Span = tracing::Span::current();

        let result = tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| {
                let expected: PhcString<'_> =
                    PhcString::new(hash.as_ref().expose_secret()).map_err(|e| e.to_string())?;

                // Parameters come from the PHC string, not from this instance.
                Argon2::default()
                    .verify_password(password.as_ref().expose_secret().as_bytes(), &expected)
                    .map_err(|e| e.to_string())
            })
        })
        .await;

        match result {
            Ok(Ok(())) => true,
            Ok(Err(e)) => {
                tracing::debug!(error = %e, "Password verification failed");
                false
            }
            Err(e) => {
                tracing::error!(error = %e, "Password verification task failed");
                false
            }
        }
    }
}
