use roster_core::{
    Account, AccountChanges, AccountId, AccountProfile, AccountStore, AccountStoreError,
    AccountSummary, Email, NewAccount, PasswordHash,
};
use secrecy::ExposeSecret;
use sqlx::{PgPool, Pool, Postgres};

#[derive(Clone)]
pub struct PostgresAccountStore {
    pool: PgPool,
}

impl PostgresAccountStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        PostgresAccountStore { pool }
    }
}

#[derive(sqlx::FromRow)]
struct AccountRow {
    id: i64,
    email: String,
    first_name: Option<String>,
    last_name: Option<String>,
    password_hash: String,
}

impl TryFrom<AccountRow> for Account {
    type Error = AccountStoreError;

    fn try_from(row: AccountRow) -> Result<Self, Self::Error> {
        Ok(Account {
            id: AccountId::new(row.id),
            email: Email::try_from(row.email)
                .map_err(|e| AccountStoreError::UnexpectedError(e.to_string()))?,
            first_name: row.first_name,
            last_name: row.last_name,
            password_hash: PasswordHash::new(row.password_hash),
        })
    }
}

#[derive(sqlx::FromRow)]
struct ProfileRow {
    id: i64,
    email: String,
    first_name: Option<String>,
    last_name: Option<String>,
}

impl From<ProfileRow> for AccountProfile {
    fn from(row: ProfileRow) -> Self {
        AccountProfile {
            id: AccountId::new(row.id),
            email: row.email,
            first_name: row.first_name,
            last_name: row.last_name,
        }
    }
}

#[derive(sqlx::FromRow)]
struct SummaryRow {
    id: i64,
    email: String,
}

impl From<SummaryRow> for AccountSummary {
    fn from(row: SummaryRow) -> Self {
        AccountSummary {
            id: AccountId::new(row.id),
            email: row.email,
        }
    }
}

// The unique index on users.email is the authoritative duplicate check.
fn map_write_error(e: sqlx::Error) -> AccountStoreError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return AccountStoreError::AccountAlreadyExists;
        }
    }
    AccountStoreError::UnexpectedError(e.to_string())
}

#[async_trait::async_trait]
impl AccountStore for PostgresAccountStore {
    #[tracing::instrument(name = "Finding account by email in PostgreSQL", skip_all)]
    async fn find_by_email(&self, email: &Email) -> Result<Option<Account>, AccountStoreError> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
                SELECT id, email, first_name, last_name, password_hash
                FROM users
                WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AccountStoreError::UnexpectedError(e.to_string()))?;

        row.map(Account::try_from).transpose()
    }

    #[tracing::instrument(name = "Finding account by id in PostgreSQL", skip(self))]
    async fn find_by_id(&self, id: AccountId) -> Result<Option<Account>, AccountStoreError> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
                SELECT id, email, first_name, last_name, password_hash
                FROM users
                WHERE id = $1
            "#,
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AccountStoreError::UnexpectedError(e.to_string()))?;

        row.map(Account::try_from).transpose()
    }

    #[tracing::instrument(name = "Adding account to PostgreSQL", skip_all)]
    async fn create(&self, account: NewAccount) -> Result<AccountSummary, AccountStoreError> {
        let row = sqlx::query_as::<_, SummaryRow>(
            r#"
                INSERT INTO users (email, first_name, last_name, password_hash)
                VALUES ($1, $2, $3, $4)
                RETURNING id, email
            "#,
        )
        .bind(account.email.as_str())
        .bind(account.first_name)
        .bind(account.last_name)
        .bind(account.password_hash.as_ref().expose_secret())
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(row.into())
    }

    #[tracing::instrument(name = "Updating account in PostgreSQL", skip(self, changes))]
    async fn update(
        &self,
        id: AccountId,
        changes: AccountChanges,
    ) -> Result<AccountProfile, AccountStoreError> {
        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
                UPDATE users
                SET email = COALESCE($2, email),
                    first_name = COALESCE($3, first_name),
                    last_name = COALESCE($4, last_name),
                    password_hash = COALESCE($5, password_hash),
                    updated_at = NOW()
                WHERE id = $1
                RETURNING id, email, first_name, last_name
            "#,
        )
        .bind(id.get())
        .bind(changes.email.as_ref().map(Email::as_str))
        .bind(changes.first_name)
        .bind(changes.last_name)
        .bind(
            changes
                .password_hash
                .as_ref()
                .map(|h| h.as_ref().expose_secret().as_str()),
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(map_write_error)?;

        row.map(Into::into).ok_or(AccountStoreError::AccountNotFound)
    }

    #[tracing::instrument(name = "Deleting account from PostgreSQL", skip(self))]
    async fn delete(&self, id: AccountId) -> Result<AccountSummary, AccountStoreError> {
        let row = sqlx::query_as::<_, SummaryRow>(
            r#"
                DELETE FROM users
                WHERE id = $1
                RETURNING id, email
            "#,
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AccountStoreError::UnexpectedError(e.to_string()))?;

        row.map(Into::into).ok_or(AccountStoreError::AccountNotFound)
    }
}
