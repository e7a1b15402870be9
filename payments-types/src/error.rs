//! Error types for the payment service.

/// Domain-level errors raised while turning a request into a Payment.
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Amount cannot be negative")]
    NegativeAmount,

    #[error("Wrong resource type: expected {expected}, got {got:?}")]
    WrongType {
        expected: &'static str,
        got: Option<String>,
    },

    #[error("Missing resource data")]
    MissingData,

    #[error("Malformed request body: {0}")]
    MalformedBody(String),
}

/// Repository-level errors (data access failures).
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Entity not found")]
    NotFound,
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found")]
    NotFound,

    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => AppError::NotFound,
            RepoError::Database(e) => AppError::Internal(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_stays_distinct_from_storage_failure() {
        assert!(matches!(AppError::from(RepoError::NotFound), AppError::NotFound));
        assert!(matches!(
            AppError::from(RepoError::Database("connection reset".into())),
            AppError::Internal(msg) if msg == "connection reset"
        ));
    }

    #[test]
    fn test_decode_errors_are_client_errors() {
        for err in [
            DomainError::MissingData,
            DomainError::NegativeAmount,
            DomainError::InvalidAmount("abc".into()),
        ] {
            assert!(matches!(AppError::from(err), AppError::BadRequest(_)));
        }
    }

    #[test]
    fn test_wrong_type_message() {
        let err = DomainError::WrongType {
            expected: "Payment",
            got: Some("Invoice".into()),
        };
        assert_eq!(
            err.to_string(),
            "Wrong resource type: expected Payment, got Some(\"Invoice\")"
        );
    }
}
