//! JSON:API-style resource envelope for payments.
//!
//! Wire shape of a single resource:
//!
//! ```json
//! {"data":{"id":"...","amount":"100.21","type":"Payment","links":{"self":"/payments/..."}}}
//! ```
//!
//! and of a collection:
//!
//! ```json
//! {"data":[...],"links":{"self":"/payments"}}
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::domain::{Money, Payment, minor_units_to_decimal};
use crate::error::DomainError;

/// Canonical path of the payments collection.
pub const COLLECTION_PATH: &str = "/payments";

// ─────────────────────────────────────────────────────────────────────────────
// Wire documents
// ─────────────────────────────────────────────────────────────────────────────

/// Links attached to a resource or a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Links {
    /// Canonical path of the resource
    #[serde(rename = "self")]
    #[schema(example = "/payments/4ee3a8d8-ca7b-4290-a52c-dd5b6165ec43")]
    pub self_link: String,
}

/// A single typed, linked resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ResourceData {
    /// Resource identifier, absent before the resource is stored
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "4ee3a8d8-ca7b-4290-a52c-dd5b6165ec43")]
    pub id: Option<String>,
    /// Amount as a decimal string with two fractional digits
    #[schema(example = "100.21")]
    pub amount: String,
    /// Resource type tag
    #[serde(rename = "type")]
    #[schema(example = "Payment")]
    pub resource_type: String,
    pub links: Links,
}

/// Envelope around one resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SingleDocument {
    pub data: ResourceData,
}

/// Envelope around a collection of resources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ListDocument {
    pub data: Vec<ResourceData>,
    pub links: Links,
}

/// Resource body accepted on create and update.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RequestData {
    /// Amount as a non-negative decimal string
    #[schema(example = "100.21")]
    pub amount: String,
    /// Must be `Payment`
    #[serde(rename = "type")]
    #[schema(example = "Payment")]
    pub resource_type: String,
}

/// Envelope accepted on create and update.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RequestDocument {
    pub data: RequestData,
}

impl RequestDocument {
    /// Builds a payment request body for the given amount string.
    pub fn payment(amount: impl Into<String>) -> Self {
        Self {
            data: RequestData {
                amount: amount.into(),
                resource_type: PaymentCodec::TYPE.to_string(),
            },
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Codec
// ─────────────────────────────────────────────────────────────────────────────

/// Decode/encode contract for one resource type.
///
/// Handlers call the implementation for their resource directly.
pub trait ResourceCodec {
    /// Domain value carried by the resource.
    type Item;

    /// Value of the `type` member on the wire.
    const TYPE: &'static str;

    /// Parses a request envelope into a domain value without identity.
    fn decode(raw: &[u8]) -> Result<Self::Item, DomainError>;

    /// Encodes one item under the given self link.
    fn encode_single(item: &Self::Item, self_link: &str) -> Result<Vec<u8>, serde_json::Error>;

    /// Encodes items in the given order; each item links to `collection_link/<id>`.
    fn encode_list(
        items: &[Self::Item],
        collection_link: &str,
    ) -> Result<Vec<u8>, serde_json::Error>;
}

/// Codec for the `Payment` resource.
pub struct PaymentCodec;

impl PaymentCodec {
    /// Self link of a payment inside a collection. Without an id this is the
    /// collection itself.
    pub fn self_link(collection_link: &str, payment: &Payment) -> String {
        match payment.id {
            Some(id) => format!("{collection_link}/{id}"),
            None => collection_link.to_string(),
        }
    }

    fn view(payment: &Payment, self_link: String) -> ResourceData {
        ResourceData {
            id: payment.id.map(|id| id.to_string()),
            amount: minor_units_to_decimal(payment.amount.minor_units()),
            resource_type: Self::TYPE.to_string(),
            links: Links { self_link },
        }
    }
}

impl ResourceCodec for PaymentCodec {
    type Item = Payment;

    const TYPE: &'static str = "Payment";

    fn decode(raw: &[u8]) -> Result<Payment, DomainError> {
        if raw.trim_ascii().is_empty() {
            return Err(DomainError::MissingData);
        }

        let envelope: Map<String, Value> =
            serde_json::from_slice(raw).map_err(|e| DomainError::MalformedBody(e.to_string()))?;

        let data = match envelope.get("data") {
            Some(Value::Object(data)) if !data.is_empty() => data,
            _ => return Err(DomainError::MissingData),
        };

        match data.get("type").and_then(Value::as_str) {
            Some(tag) if tag == Self::TYPE => {}
            other => {
                return Err(DomainError::WrongType {
                    expected: Self::TYPE,
                    got: other.map(str::to_owned),
                });
            }
        }

        let amount = data
            .get("amount")
            .and_then(Value::as_str)
            .ok_or_else(|| DomainError::InvalidAmount("amount must be a decimal string".into()))?;

        Ok(Payment::new(Money::parse(amount)?))
    }

    fn encode_single(payment: &Payment, self_link: &str) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(&SingleDocument {
            data: Self::view(payment, self_link.to_string()),
        })
    }

    fn encode_list(
        payments: &[Payment],
        collection_link: &str,
    ) -> Result<Vec<u8>, serde_json::Error> {
        let data = payments
            .iter()
            .map(|p| Self::view(p, Self::self_link(collection_link, p)))
            .collect();

        serde_json::to_vec(&ListDocument {
            data,
            links: Links {
                self_link: collection_link.to_string(),
            },
        })
    }
}
