/// Error types for Content Service
///
/// Every fallible operation returns [`AppError`]. Errors are rendered as
/// `{ "status": u16, "message": String }` bodies, with a per-field `errors`
/// list added for validation failures.
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde::Serialize;
use utoipa::ToSchema;

/// Result type for content-service operations
pub type Result<T> = std::result::Result<T, AppError>;

/// A single violated field constraint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Write payload failed field constraints
    #[error("Validation failed")]
    Validation(Vec<FieldViolation>),

    /// Request could not be decoded (malformed JSON, bad path segment)
    #[error("{0}")]
    BadRequest(String),

    /// No content with the referenced id
    #[error("Content not found with id: {0}")]
    NotFound(i64),

    /// Underlying store unavailable or rejected the operation
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Wire shape of every error response
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub status: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldViolation>>,
}

impl AppError {
    /// Short label used for metrics and logs
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "validation",
            AppError::BadRequest(_) => "bad_request",
            AppError::NotFound(_) => "not_found",
            AppError::Storage(_) => "storage",
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        let body = match self {
            AppError::Validation(violations) => ErrorResponse {
                status: status.as_u16(),
                message: self.to_string(),
                errors: Some(violations.clone()),
            },
            // Cause is logged by the service layer, never sent to clients
            AppError::Storage(_) => ErrorResponse {
                status: status.as_u16(),
                message: "Internal server error".to_string(),
                errors: None,
            },
            _ => ErrorResponse {
                status: status.as_u16(),
                message: self.to_string(),
                errors: None,
            },
        };

        HttpResponse::build(status).json(body)
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut violations: Vec<FieldViolation> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, field_errors)| {
                let field = field.to_string();
                field_errors.iter().map(move |e| FieldViolation {
                    field: field.clone(),
                    message: e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string()),
                })
            })
            .collect();

        violations.sort_by(|a, b| a.field.cmp(&b.field).then(a.message.cmp(&b.message)));
        violations.dedup();

        AppError::Validation(violations)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_web::test]
    async fn not_found_renders_status_and_message() {
        let resp = AppError::NotFound(999).error_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body = to_bytes(resp.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], 404);
        assert_eq!(json["message"], "Content not found with id: 999");
        assert!(json.get("errors").is_none());
    }

    #[actix_web::test]
    async fn storage_error_hides_cause() {
        let resp = AppError::Storage("connection refused".into()).error_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(resp.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], 500);
        assert_eq!(json["message"], "Internal server error");
    }

    #[test]
    fn validation_errors_are_flattened_and_sorted() {
        let mut errors = validator::ValidationErrors::new();
        let mut body_err = validator::ValidationError::new("blank");
        body_err.message = Some("Body is required".into());
        let mut title_err = validator::ValidationError::new("length");
        title_err.message = Some("Title must not exceed 255 characters".into());
        errors.add("title", title_err);
        errors.add("body", body_err);

        match AppError::from(errors) {
            AppError::Validation(violations) => {
                assert_eq!(violations.len(), 2);
                assert_eq!(violations[0].field, "body");
                assert_eq!(violations[1].field, "title");
                assert_eq!(violations[1].message, "Title must not exceed 255 characters");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
