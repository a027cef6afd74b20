/// Data models for content-service
///
/// - `Content`: the stored document row
/// - `ContentRequest`: inbound create/update payload, checked by `validator`
/// - `NewContent`: a payload that passed validation
/// - `ContentResponse`: the wire view of a stored document
use crate::error::{AppError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// A persisted content document
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Content {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create/update payload as received on the wire
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct ContentRequest {
    #[validate(
        required(message = "Title is required"),
        custom(function = "title_not_blank"),
        length(max = 255, message = "Title must not exceed 255 characters")
    )]
    #[schema(max_length = 255)]
    pub title: Option<String>,

    #[validate(
        required(message = "Body is required"),
        custom(function = "body_not_blank")
    )]
    pub body: Option<String>,
}

/// A write payload that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContent {
    pub title: String,
    pub body: String,
}

impl ContentRequest {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            body: Some(body.into()),
        }
    }

    /// Run the field checks, reporting every violated field at once
    pub fn into_validated(self) -> Result<NewContent> {
        self.validate()?;

        match (self.title, self.body) {
            (Some(title), Some(body)) => Ok(NewContent { title, body }),
            // `required` already rejected missing fields
            _ => Err(AppError::BadRequest("title and body are required".to_string())),
        }
    }
}

fn not_blank(value: &str, message: &'static str) -> std::result::Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some(message.into());
        return Err(err);
    }
    Ok(())
}

fn title_not_blank(value: &str) -> std::result::Result<(), ValidationError> {
    not_blank(value, "Title is required")
}

fn body_not_blank(value: &str) -> std::result::Result<(), ValidationError> {
    not_blank(value, "Body is required")
}

/// Wire view of a stored content document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContentResponse {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Content> for ContentResponse {
    fn from(content: Content) -> Self {
        Self {
            id: content.id,
            title: content.title,
            body: content.body,
            created_at: content.created_at,
            updated_at: content.updated_at,
        }
    }
}
