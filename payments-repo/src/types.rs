//! Shared database row types for SQLite and PostgreSQL.

use sqlx::FromRow;

use payments_types::{Money, Payment, PaymentId, RepoError};

/// Payment row as stored by SQLite (UUID kept as TEXT).
#[cfg(feature = "sqlite")]
#[derive(FromRow)]
pub struct DbSqlitePayment {
    pub id: String,
    pub amount: i64,
}

/// Payment row as stored by PostgreSQL.
#[cfg(feature = "postgres")]
#[derive(FromRow)]
pub struct DbPgPayment {
    pub id: uuid::Uuid,
    pub amount: i64,
}

#[cfg(feature = "sqlite")]
impl DbSqlitePayment {
    /// Convert database row to domain Payment.
    pub fn into_domain(self) -> Result<Payment, RepoError> {
        let uuid = uuid::Uuid::parse_str(&self.id).map_err(|e| RepoError::Database(e.to_string()))?;
        payment_from_parts(PaymentId::from_uuid(uuid), self.amount)
    }
}

#[cfg(feature = "postgres")]
impl DbPgPayment {
    /// Convert database row to domain Payment.
    pub fn into_domain(self) -> Result<Payment, RepoError> {
        payment_from_parts(PaymentId::from_uuid(self.id), self.amount)
    }
}

fn payment_from_parts(id: PaymentId, amount: i64) -> Result<Payment, RepoError> {
    let amount = Money::new(amount)
        .map_err(|_| RepoError::Database(format!("Stored amount {amount} of {id} is negative")))?;
    Ok(Payment::from_parts(id, amount))
}

/// Logs and wraps a driver error.
pub fn db_error(err: sqlx::Error) -> RepoError {
    tracing::error!(error = %err, "payments query failed");
    RepoError::Database(err.to_string())
}
