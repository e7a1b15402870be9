//! # Payments Hex
//!
//! Application service layer and HTTP adapter for the payments service.
//!
//! ## Architecture
//!
//! - `service/` - Application service (orchestrates the persistence gateway)
//! - `inbound/` - HTTP adapter (Axum server, resource envelope in and out)
//! - `openapi/` - OpenAPI document served at `/openapi.json`
//!
//! The service is generic over `R: PaymentRepository`, allowing
//! different repository implementations to be injected.

pub mod inbound;
pub mod openapi;
pub mod service;


pub use service::PaymentService;
