//! # Payments Client SDK
//!
//! A typed Rust client for the Payments API.

use payments_types::{ListDocument, RequestDocument, ResourceData, SingleDocument};
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Payments API client.
pub struct PaymentsClient {
    base_url: String,
    http: Client,
}

impl PaymentsClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Checks if the API is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Ok(resp.status().is_success())
    }

    /// Creates a payment. `amount` is a decimal string such as `"100.21"`.
    pub async fn create_payment(&self, amount: &str) -> Result<ResourceData, ClientError> {
        let req = self
            .http
            .post(self.url("/payments"))
            .json(&RequestDocument::payment(amount));
        let doc: SingleDocument = self.send(req).await?;
        Ok(doc.data)
    }

    /// Gets a payment by ID.
    pub async fn get_payment(&self, id: &str) -> Result<ResourceData, ClientError> {
        let req = self.http.get(self.url(&format!("/payments/{id}")));
        let doc: SingleDocument = self.send(req).await?;
        Ok(doc.data)
    }

    /// Lists all payments.
    pub async fn list_payments(&self) -> Result<Vec<ResourceData>, ClientError> {
        let req = self.http.get(self.url("/payments"));
        let doc: ListDocument = self.send(req).await?;
        Ok(doc.data)
    }

    /// Replaces the amount of a payment.
    pub async fn update_payment(
        &self,
        id: &str,
        amount: &str,
    ) -> Result<ResourceData, ClientError> {
        let req = self
            .http
            .put(self.url(&format!("/payments/{id}")))
            .json(&RequestDocument::payment(amount));
        let doc: SingleDocument = self.send(req).await?;
        Ok(doc.data)
    }

    /// Deletes a payment.
    pub async fn delete_payment(&self, id: &str) -> Result<(), ClientError> {
        let resp = self
            .http
            .delete(self.url(&format!("/payments/{id}")))
            .send()
            .await?;

        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = resp.text().await.unwrap_or_default();
            Err(api_error(status.as_u16(), body))
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let resp = req.send().await?;
        self.handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            let body = resp.text().await.unwrap_or_default();
            Err(api_error(status.as_u16(), body))
        }
    }
}

/// Builds an API error from an error body `{"status": ..., "error": ...}`.
///
/// Prefers the `error` detail, then the `status` text, then the raw body.
fn api_error(status: u16, body: String) -> ClientError {
    let parsed = serde_json::from_str::<serde_json::Value>(&body).ok();
    let field = |name: &str| {
        parsed
            .as_ref()
            .and_then(|v| v.get(name))
            .and_then(|e| e.as_str())
            .map(String::from)
    };
    let message = field("error").or_else(|| field("status")).unwrap_or(body);
    ClientError::Api { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = PaymentsClient::new("http://localhost:8000");
        assert_eq!(client.base_url, "http://localhost:8000");
    }

    #[test]
    fn test_client_with_trailing_slash() {
        let client = PaymentsClient::new("http://localhost:8000/");
        assert_eq!(client.base_url, "http://localhost:8000");
        assert_eq!(client.url("/payments"), "http://localhost:8000/payments");
    }

    #[test]
    fn test_api_error_prefers_detail() {
        let err = api_error(
            400,
            r#"{"status":"Invalid request.","error":"invalid amount: abc"}"#.to_string(),
        );
        assert!(matches!(
            err,
            ClientError::Api { status: 400, ref message } if message == "invalid amount: abc"
        ));
    }

    #[test]
    fn test_api_error_falls_back_to_status_text() {
        let err = api_error(404, r#"{"status":"Resource not found."}"#.to_string());
        assert!(matches!(
            err,
            ClientError::Api { status: 404, ref message } if message == "Resource not found."
        ));
    }

    #[test]
    fn test_api_error_keeps_raw_body() {
        let err = api_error(502, "Bad Gateway".to_string());
        assert!(matches!(
            err,
            ClientError::Api { status: 502, ref message } if message == "Bad Gateway"
        ));
    }
}
