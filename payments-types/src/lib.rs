//! # Payments Types
//!
//! Domain types, wire envelope and port traits for the payment resource service.
//! This crate has ZERO external IO dependencies - only data structures,
//! the money codec, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (Money, Payment)
//! - `ports/` - Trait definitions that adapters must implement
//! - `resource/` - JSON:API-style envelope and its codec
//! - `error/` - Domain, repository and application error types

pub mod domain;
pub mod error;
pub mod ports;
pub mod resource;

// Re-export commonly used types
pub use domain::{Money, Payment, PaymentId, decimal_to_minor_units, minor_units_to_decimal};
pub use error::{AppError, DomainError, RepoError};
pub use ports::PaymentRepository;
pub use resource::{
    COLLECTION_PATH, Links, ListDocument, PaymentCodec, RequestData, RequestDocument,
    ResourceCodec, ResourceData, SingleDocument,
};
