//! Repository port trait.
//!
//! This is the primary port in our hexagonal architecture.
//! Adapters (Postgres, SQLite, in-memory mocks) implement this trait.

use crate::domain::{Money, Payment, PaymentId};
use crate::error::RepoError;

/// Persistence gateway for payments.
///
/// Every method is a single statement against the `payments` table; there are
/// no explicit transactions. A missing row is always `RepoError::NotFound`,
/// never an empty value.
#[async_trait::async_trait]
pub trait PaymentRepository: Send + Sync + 'static {
    /// Inserts a new payment and returns its generated id.
    async fn create(&self, amount: Money) -> Result<PaymentId, RepoError>;

    /// Fetches exactly one payment.
    async fn get(&self, id: PaymentId) -> Result<Payment, RepoError>;

    /// Replaces the amount of an existing payment.
    ///
    /// Returns `NotFound` when the statement matched no row.
    async fn update(&self, id: PaymentId, amount: Money) -> Result<(), RepoError>;

    /// Removes a payment.
    ///
    /// Returns `NotFound` when the statement matched no row.
    async fn delete(&self, id: PaymentId) -> Result<(), RepoError>;

    /// Lists all payments in storage order. An empty table yields an empty vector.
    async fn list(&self) -> Result<Vec<Payment>, RepoError>;
}
