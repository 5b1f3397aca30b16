use crate::domain::{
    account::AccountId,
    identity::{AccessToken, Identity},
};

/// Issues signed, time-bounded access tokens.
///
/// Verification lives on the [`AuthValidator`](super::auth_validator::AuthValidator)
/// side; a token carries no mutable state after it is issued.
pub trait TokenIssuer: Clone + Send + Sync + 'static {
    type Error: std::error::Error + Send + Sync + 'static;

    fn issue(&self, id: AccountId, email: &str) -> Result<AccessToken, Self::Error>;

    /// Decode and check a token previously produced by [`TokenIssuer::issue`].
    fn verify(&self, token: &str) -> Result<Identity, Self::Error>;
}
