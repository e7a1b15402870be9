//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State, rejection::PathRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use payments_types::{
    AppError, COLLECTION_PATH, PaymentCodec, PaymentId, PaymentRepository, ResourceCodec,
};

use crate::PaymentService;

/// Content type of every response.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Detail sent with every 500; the underlying cause is only logged.
const INTERNAL_ERROR_DETAIL: &str = "The request could not be completed.";

/// Application state shared across handlers.
pub struct AppState<R: PaymentRepository> {
    pub service: PaymentService<R>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

/// Error body: `{"status": <text>, "error": <detail>}`.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    /// Human readable status
    #[schema(example = "Invalid request.")]
    pub status: String,
    /// Error detail, when there is one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self.0 {
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    status: "Invalid request.".into(),
                    error: Some(msg),
                },
            ),
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                ErrorResponse {
                    status: "Resource not found.".into(),
                    error: None,
                },
            ),
            AppError::Unprocessable(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorResponse {
                    status: "Error rendering response.".into(),
                    error: Some(msg),
                },
            ),
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        status: "Internal server error.".into(),
                        error: Some(INTERNAL_ERROR_DETAIL.into()),
                    },
                )
            }
        };

        let body = serde_json::to_vec(&body).unwrap_or_default();
        json_response(status, body)
    }
}

/// Builds a response with the JSON content type.
pub fn json_response(status: StatusCode, body: Vec<u8>) -> Response {
    (status, [(header::CONTENT_TYPE, JSON_CONTENT_TYPE)], body).into_response()
}

fn render_error(err: serde_json::Error) -> ApiError {
    ApiError(AppError::Unprocessable(err.to_string()))
}

/// A path segment that does not decode, or is not a UUID, can never name a
/// stored payment.
fn parse_id(path: Result<Path<String>, PathRejection>) -> Result<PaymentId, ApiError> {
    let Path(id) = path.map_err(|e| {
        tracing::debug!(error = %e, "rejected payment path");
        ApiError(AppError::NotFound)
    })?;
    let payment_id = id.parse().map_err(|_| ApiError(AppError::NotFound))?;
    tracing::Span::current().record("payment_id", tracing::field::display(&payment_id));
    Ok(payment_id)
}

fn single(status: StatusCode, payment: &payments_types::Payment) -> Result<Response, ApiError> {
    let link = PaymentCodec::self_link(COLLECTION_PATH, payment);
    let body = PaymentCodec::encode_single(payment, &link).map_err(render_error)?;
    Ok(json_response(status, body))
}

/// Health check endpoint.
pub async fn health() -> Response {
    json_response(StatusCode::OK, br#"{"status":"healthy"}"#.to_vec())
}

/// Fallback for unknown routes.
pub async fn not_found() -> ApiError {
    ApiError(AppError::NotFound)
}

/// List all payments.
#[tracing::instrument(skip(state))]
pub async fn list_payments<R: PaymentRepository>(
    State(state): State<Arc<AppState<R>>>,
) -> Result<Response, ApiError> {
    let payments = state.service.list_payments().await?;
    let body = PaymentCodec::encode_list(&payments, COLLECTION_PATH).map_err(render_error)?;
    Ok(json_response(StatusCode::OK, body))
}

/// Get payment by ID.
#[tracing::instrument(skip(state, path), fields(payment_id = tracing::field::Empty))]
pub async fn get_payment<R: PaymentRepository>(
    State(state): State<Arc<AppState<R>>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Response, ApiError> {
    let payment_id = parse_id(path)?;
    let payment = state.service.get_payment(payment_id).await?;
    single(StatusCode::OK, &payment)
}

/// Create a payment from a resource envelope.
#[tracing::instrument(skip(state, body))]
pub async fn create_payment<R: PaymentRepository>(
    State(state): State<Arc<AppState<R>>>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let payment = PaymentCodec::decode(&body).map_err(AppError::from)?;
    let stored = state.service.create_payment(payment).await?;
    single(StatusCode::CREATED, &stored)
}

/// Replace the amount of a payment.
#[tracing::instrument(skip(state, path, body), fields(payment_id = tracing::field::Empty))]
pub async fn update_payment<R: PaymentRepository>(
    State(state): State<Arc<AppState<R>>>,
    path: Result<Path<String>, PathRejection>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let payment_id = parse_id(path)?;
    let payment = PaymentCodec::decode(&body)
        .map_err(AppError::from)?
        .with_id(payment_id);

    let stored = state.service.update_payment(payment_id, payment).await?;
    single(StatusCode::OK, &stored)
}

/// Delete a payment.
#[tracing::instrument(skip(state, path), fields(payment_id = tracing::field::Empty))]
pub async fn delete_payment<R: PaymentRepository>(
    State(state): State<Arc<AppState<R>>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Response, ApiError> {
    let payment_id = parse_id(path)?;
    state.service.delete_payment(payment_id).await?;
    Ok(json_response(StatusCode::OK, Vec::new()))
}
