//! Payment Application Service
//!
//! Orchestrates the persistence gateway through the repository port.
//! Contains NO infrastructure logic and NO wire formatting.

use payments_types::{AppError, Payment, PaymentId, PaymentRepository};

/// Application service for payment operations.
///
/// Generic over `R: PaymentRepository` - the adapter is injected at compile time.
/// This enables:
/// - Swapping repositories without code changes
/// - Testing with an in-memory repo
/// - Compile-time checks for port implementation
pub struct PaymentService<R: PaymentRepository> {
    repo: R,
}

impl<R: PaymentRepository> PaymentService<R> {
    /// Creates a new payment service with the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns a reference to the underlying repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Lists all payments in storage order.
    pub async fn list_payments(&self) -> Result<Vec<Payment>, AppError> {
        self.repo.list().await.map_err(Into::into)
    }

    /// Gets a payment by ID.
    pub async fn get_payment(&self, id: PaymentId) -> Result<Payment, AppError> {
        self.repo.get(id).await.map_err(Into::into)
    }

    /// Stores a new payment and returns it as read back from storage.
    pub async fn create_payment(&self, payment: Payment) -> Result<Payment, AppError> {
        let id = self.repo.create(payment.amount).await?;
        tracing::info!(payment_id = %id, amount = payment.amount.minor_units(), "payment created");

        self.get_payment(id).await
    }

    /// Replaces the amount of an existing payment and returns the stored result.
    ///
    /// The existence check runs before the write so a missing id never reaches
    /// the update statement.
    pub async fn update_payment(
        &self,
        id: PaymentId,
        payment: Payment,
    ) -> Result<Payment, AppError> {
        self.get_payment(id).await?;

        self.repo.update(id, payment.amount).await?;
        tracing::info!(payment_id = %id, amount = payment.amount.minor_units(), "payment updated");

        self.get_payment(id).await
    }

    /// Deletes an existing payment.
    pub async fn delete_payment(&self, id: PaymentId) -> Result<(), AppError> {
        self.get_payment(id).await?;

        self.repo.delete(id).await?;
        tracing::info!(payment_id = %id, "payment deleted");

        Ok(())
    }
}
