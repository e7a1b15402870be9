//! PostgreSQL repository adapter.

use async_trait::async_trait;
use sqlx::PgPool;

use payments_types::{Money, Payment, PaymentId, PaymentRepository, RepoError};

use crate::types::{DbPgPayment, db_error};

// ─────────────────────────────────────────────────────────────────────────────
// PostgreSQL Repository
// ─────────────────────────────────────────────────────────────────────────────

/// PostgreSQL repository implementation.
pub struct PostgresRepo {
    pool: PgPool,
}

/// Executes SQL statements from a migration file, splitting by semicolons.
async fn execute_migration(pool: &PgPool, sql: &str, name: &str) -> Result<(), anyhow::Error> {
    for statement in sql.split(';') {
        let stmt = statement.trim();
        if !stmt.is_empty() {
            sqlx::query(stmt)
                .execute(pool)
                .await
                .map_err(|e| anyhow::anyhow!("Migration {} failed: {}", name, e))?;
        }
    }
    Ok(())
}

/// Runs all database migrations.
async fn run_migrations(pool: &PgPool) -> Result<(), anyhow::Error> {
    execute_migration(
        pool,
        include_str!("../migrations/0001_create_payments_pg.sql"),
        "0001",
    )
    .await
}

impl PostgresRepo {
    /// Creates a new PostgreSQL repository with automatic migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        let pool = PgPool::connect(database_url).await?;
        run_migrations(&pool).await?;
        Ok(Self { pool })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Repository implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl PaymentRepository for PostgresRepo {
    async fn create(&self, amount: Money) -> Result<PaymentId, RepoError> {
        let id = PaymentId::new();

        sqlx::query(r#"INSERT INTO payments (id, amount) VALUES ($1, $2)"#)
            .bind(*id.as_uuid())
            .bind(amount.minor_units())
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        Ok(id)
    }

    async fn get(&self, id: PaymentId) -> Result<Payment, RepoError> {
        let row: Option<DbPgPayment> =
            sqlx::query_as(r#"SELECT id, amount FROM payments WHERE id = $1"#)
                .bind(*id.as_uuid())
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
        let result = sqlx::query(r#"UPDATE payments SET amount = $1 WHERE id = $2"#)
            .bind(amount.minor_units())
            .bind(*id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, id: PaymentId) -> Result<(), RepoError> {
        let result = sqlx::query(r#"DELETE FROM payments WHERE id = $1"#)
            .bind(*id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Payment>, RepoError> {
        let rows: Vec<DbPgPayment> = sqlx::query_as(r#"SELECT id, amount FROM payments"#)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error)?;

        rows.into_iter().map(DbPgPayment::into_domain).collect()
    }
}
