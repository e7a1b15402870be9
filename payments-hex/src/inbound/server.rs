//! HTTP Server configuration and startup.

use std::any::Any;
use std::sync::Arc;

use axum::{
    Router,
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use utoipa::OpenApi;

use payments_types::{AppError, PaymentRepository};

use super::handlers::{self, ApiError, AppState};
use super::middleware::{json_content_type, request_id};
use crate::PaymentService;
use crate::openapi::ApiDoc;

/// HTTP Server for the Payments API.
pub struct HttpServer<R: PaymentRepository> {
    state: Arc<AppState<R>>,
}

impl<R: PaymentRepository> HttpServer<R> {
    /// Creates a new HTTP server with the given service.
    pub fn new(service: PaymentService<R>) -> Self {
        Self {
            state: Arc::new(AppState { service }),
        }
    }

    /// Builds the Axum router with all routes.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/health", get(handlers::health))
            .route("/openapi.json", get(openapi_json))
            .route(
                "/payments",
                get(handlers::list_payments::<R>).post(handlers::create_payment::<R>),
            )
            .route(
                "/payments/{id}",
                get(handlers::get_payment::<R>)
                    .put(handlers::update_payment::<R>)
                    .delete(handlers::delete_payment::<R>),
            )
            .fallback(handlers::not_found)
            .layer(CatchPanicLayer::custom(handle_panic))
            .layer(middleware::from_fn(json_content_type))
            .layer(TraceLayer::new_for_http())
            .layer(middleware::from_fn(request_id))
            .with_state(self.state.clone())
    }

    /// Runs the server on the given address with graceful shutdown.
    pub async fn run(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Server listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn openapi_json() -> Result<Response, ApiError> {
    let body = ApiDoc::openapi()
        .to_json()
        .map_err(|e| ApiError(AppError::Unprocessable(e.to_string())))?;
    Ok(handlers::json_response(StatusCode::OK, body.into_bytes()))
}

/// Turns a handler panic into the JSON 500 body.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    ApiError(AppError::Internal(format!("handler panicked: {detail}"))).into_response()
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
