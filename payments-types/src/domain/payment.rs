//! Payment domain model.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::money::Money;

/// Unique identifier for a Payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct PaymentId(Uuid);

impl PaymentId {
    /// Creates a new random PaymentId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a PaymentId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for PaymentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PaymentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PaymentId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A single payment.
///
/// `id` is `None` until the repository has stored the payment.
/// Updates replace the whole amount; there is no partial mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payment {
    pub id: Option<PaymentId>,
    pub amount: Money,
}

impl Payment {
    /// Creates a payment that has not been persisted yet.
    pub fn new(amount: Money) -> Self {
        Self { id: None, amount }
    }

    /// Reconstructs a stored payment.
    pub fn from_parts(id: PaymentId, amount: Money) -> Self {
        Self {
            id: Some(id),
            amount,
        }
    }

    /// Attaches an identity, e.g. the id taken from a request path.
    pub fn with_id(mut self, id: PaymentId) -> Self {
        self.id = Some(id);
        self
    }
}
