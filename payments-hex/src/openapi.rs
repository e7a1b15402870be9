//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use payments_types::resource::{
    Links, ListDocument, RequestData, RequestDocument, ResourceData, SingleDocument,
};
use utoipa::OpenApi;

use crate::inbound::handlers::ErrorResponse;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// List all payments
#[utoipa::path(
    get,
    path = "/payments",
    tag = "payments",
    responses(
        (status = 200, description = "All payments, possibly none", body = ListDocument),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
async fn list_payments() {}

/// Create a payment
#[utoipa::path(
    post,
    path = "/payments",
    tag = "payments",
    request_body = RequestDocument,
    responses(
        (status = 201, description = "Payment created", body = SingleDocument),
        (status = 400, description = "Malformed envelope, wrong type or invalid amount", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
async fn create_payment() {}

/// Get a payment by ID
#[utoipa::path(
    get,
    path = "/payments/{id}",
    tag = "payments",
    params(
        ("id" = String, Path, description = "Payment ID (UUID)")
    ),
    responses(
        (status = 200, description = "Payment found", body = SingleDocument),
        (status = 404, description = "Payment not found", body = ErrorResponse)
    )
)]
async fn get_payment() {}

/// Replace the amount of a payment
#[utoipa::path(
    put,
    path = "/payments/{id}",
    tag = "payments",
    request_body = RequestDocument,
    params(
        ("id" = String, Path, description = "Payment ID (UUID)")
    ),
    responses(
        (status = 200, description = "Payment updated", body = SingleDocument),
        (status = 400, description = "Malformed envelope, wrong type or invalid amount", body = ErrorResponse),
        (status = 404, description = "Payment not found", body = ErrorResponse)
    )
)]
async fn update_payment() {}

/// Delete a payment
#[utoipa::path(
    delete,
    path = "/payments/{id}",
    tag = "payments",
    params(
        ("id" = String, Path, description = "Payment ID (UUID)")
    ),
    responses(
        (status = 200, description = "Payment deleted, empty body"),
        (status = 404, description = "Payment not found", body = ErrorResponse)
    )
)]
async fn delete_payment() {}

/// OpenAPI documentation for the Payments API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Payments API",
        version = "1.0.0",
        description = "Create, read, update, delete and list payments.\n\nResources use a JSON:API-style envelope: `{\"data\": {...}, \"links\": {\"self\": ...}}`. Amounts are decimal strings with two fractional digits.",
        license(name = "MIT"),
    ),
    paths(
        health,
        list_payments,
        create_payment,
        get_payment,
        update_payment,
        delete_payment,
    ),
    components(
        schemas(
            Links,
            ResourceData,
            SingleDocument,
            ListDocument,
            RequestData,
            RequestDocument,
            ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "payments", description = "Payment resource operations"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_payment_routes() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/payments"));
        assert!(doc.paths.paths.contains_key("/payments/{id}"));
    }
}
