pub mod hashmap_account_store;
pub mod postgres_account_store;
pub mod postgres_audit_log;
pub mod vec_audit_log;

pub use hashmap_account_store::HashMapAccountStore;
pub use postgres_account_store::PostgresAccountStore;
pub use postgres_audit_log::PostgresAuditLog;
pub use vec_audit_log::VecAuditLog;
