//! Domain models for the payment service.

pub mod money;
pub mod payment;

pub use money::{Money, decimal_to_minor_units, minor_units_to_decimal};
pub use payment::{Payment, PaymentId};
