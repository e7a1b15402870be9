//! SQLite repository adapter.
#![allow(clippy::collapsible_if)]

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;

use payments_types::{Money, Payment, PaymentId, PaymentRepository, RepoError};

use crate::types::{DbSqlitePayment, db_error};

// ─────────────────────────────────────────────────────────────────────────────
// SQLite Repository
// ─────────────────────────────────────────────────────────────────────────────

/// SQLite repository implementation.
pub struct SqliteRepo {
    pool: SqlitePool,
}

impl SqliteRepo {
    /// Creates a new SQLite repository with automatic migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        // Ensure on-disk SQLite target directory exists (no-op for in-memory).
        if let Some(path) = database_url.strip_prefix("sqlite://") {
            // Remove query parameters
            let path = path.split('?').next().unwrap_or(path);
            if path != ":memory:" {
                let p = std::path::Path::new(path);
                if let Some(parent) = p.parent() {
                    if !parent.as_os_str().is_empty() {
                        tokio::fs::create_dir_all(parent).await?;
                    }
                }
            }
        }

        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        // Every connection to an in-memory database sees its own empty database,
        // so those pools hold exactly one connection for their whole lifetime.
        let pool = if is_in_memory(database_url) {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_with(options)
                .await?
        } else {
            SqlitePool::connect_with(options).await?
        };

        let repo = Self { pool };
        repo.create_schema().await?;
        Ok(repo)
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Creates the database schema.
    pub async fn create_schema(&self) -> Result<(), RepoError> {
        let ddl = include_str!("../migrations/0001_create_payments.sql");
        sqlx::query(ddl).execute(&self.pool).await.map_err(db_error)?;
        Ok(())
    }
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

// ─────────────────────────────────────────────────────────────────────────────
// Repository implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl PaymentRepository for SqliteRepo {
    async fn create(&self, amount: Money) -> Result<PaymentId, RepoError> {
        let id = PaymentId::new();

        sqlx::query(r#"INSERT INTO payments (id, amount) VALUES (?, ?)"#)
            .bind(id.to_string())
            .bind(amount.minor_units())
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        Ok(id)
    }

    async fn get(&self, id: PaymentId) -> Result<Payment, RepoError> {
        let row: Option<DbSqlitePayment> =
            sqlx::query_as(r#"SELECT id, amount FROM payments WHERE id = ?"#)
                .bind(id.to_string())
                .fetch_optional(&self.pool)
                .await
                .map_err(db_error)?;

        match row {
            Some(row) => row.into_domain(),
            None => {
                tracing::debug!(payment_id = %id, "payment not found");
                Err(RepoError::NotFound)
            }
        }
    }

    async fn update(&self, id: PaymentId, amount: Money) -> Result<(), RepoError> {
        let result = sqlx::query(r#"UPDATE payments SET amount = ? WHERE id = ?"#)
            .bind(amount.minor_units())
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, id: PaymentId) -> Result<(), RepoError> {
        let result = sqlx::query(r#"DELETE FROM payments WHERE id = ?"#)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Payment>, RepoError> {
        let rows: Vec<DbSqlitePayment> =
            sqlx::query_as(r#"SELECT id, amount FROM payments ORDER BY rowid"#)
                .fetch_all(&self.pool)
                .await
                .map_err(db_error)?;

        rows.into_iter().map(DbSqlitePayment::into_domain).collect()
    }
}
