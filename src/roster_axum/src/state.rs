use roster_core::{AccountStore, AuditLog, CostFactor, CredentialHasher, TokenIssuer};

/// Shared handler state: the collaborators every account route draws from.
///
/// All collaborators are cheap to clone (internally `Arc`ed or pooled).
#[derive(Clone)]
pub struct AccountState<S, A, H, T> {
    pub account_store: S,
    pub audit_log: A,
    pub hasher: H,
    pub token_issuer: T,
    pub cost: CostFactor,
}

impl<S, A, H, T> AccountState<S, A, H, T>
where
    S: AccountStore,
    A: AuditLog,
    H: CredentialHasher,
    T: TokenIssuer,
{
    pub fn new(
        account_store: S,
        audit_log: A,
        hasher: H,
        token_issuer: T,
        cost: CostFactor,
    ) -> Self {
        Self {
            account_store,
            audit_log,
            hasher,
            token_issuer,
            cost,
        }
    }
}
