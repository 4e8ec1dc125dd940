//! API error mapping
//!
//! Maps service failures onto the HTTP taxonomy: 404 for a missing law,
//! 400 for duplicate votes and malformed bodies, 500 for storage failures.
//! Storage detail is logged server-side and never leaks into the body.

use agora_core::LawsError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Handler-level error, rendered as `{"error": ...}` with a matching status
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("Internal Server Error")]
    Internal,
}

impl From<LawsError> for ApiError {
    fn from(err: LawsError) -> Self {
        match err {
            LawsError::NotFound(_) => Self::NotFound("Law not found".to_string()),
            LawsError::AlreadyVoted { .. } => {
                Self::BadRequest("You have already voted on this law".to_string())
            }
            LawsError::Validation(msg) => Self::BadRequest(msg),
            LawsError::Database(_) | LawsError::Storage(_) => {
                error!(error = %err, "storage failure");
                Self::Internal
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_mapping() {
        let err: ApiError = LawsError::NotFound("BILL1".to_string()).into();
        assert!(matches!(err, ApiError::NotFound(_)));
        assert_eq!(err.to_string(), "Law not found");
    }

    #[test]
    fn test_already_voted_mapping() {
        let err: ApiError = LawsError::AlreadyVoted {
            user_id: "u1".to_string(),
            law_id: "BILL1".to_string(),
        }
        .into();
        assert!(matches!(err, ApiError::BadRequest(_)));
        assert_eq!(err.to_string(), "You have already voted on this law");
    }

    #[test]
    fn test_storage_mapping_hides_detail() {
        let err: ApiError = LawsError::Storage("disk on fire".to_string()).into();
        assert!(matches!(err, ApiError::Internal));
        assert!(!err.to_string().contains("disk"));
    }
}
