/// Content handlers - HTTP endpoints for content documents
use crate::error::{ErrorResponse, Result};
use crate::models::{ContentRequest, ContentResponse};
use crate::services::ContentService;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use utoipa::IntoParams;

/// Query parameters for the list endpoint
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Case-insensitive title fragment; empty or absent lists everything
    pub search: Option<String>,
}

/// List all content, or search titles when `search` is set
#[utoipa::path(
    get,
    path = "/api/content",
    tag = "content",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching content", body = [ContentResponse])
    )
)]
pub async fn list_content(
    service: web::Data<ContentService>,
    query: web::Query<SearchParams>,
) -> Result<HttpResponse> {
    let contents = service.search(query.search.as_deref()).await?;
    Ok(HttpResponse::Ok().json(contents))
}

/// Get content by id
#[utoipa::path(
    get,
    path = "/api/content/{id}",
    tag = "content",
    params(("id" = i64, Path, description = "Content id")),
    responses(
        (status = 200, description = "Content found", body = ContentResponse),
        (status = 404, description = "No content with this id", body = ErrorResponse)
    )
)]
pub async fn get_content(
    service: web::Data<ContentService>,
    id: web::Path<i64>,
) -> Result<HttpResponse> {
    let content = service.get_by_id(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(content))
}

/// Create content
#[utoipa::path(
    post,
    path = "/api/content",
    tag = "content",
    request_body = ContentRequest,
    responses(
        (status = 201, description = "Content created", body = ContentResponse),
        (status = 400, description = "Invalid payload", body = ErrorResponse)
    )
)]
pub async fn create_content(
    service: web::Data<ContentService>,
    req: web::Json<ContentRequest>,
) -> Result<HttpResponse> {
    let payload = req.into_inner().into_validated()?;
    let created = service.create(payload).await?;
    Ok(HttpResponse::Created().json(created))
}

/// Replace title and body of existing content
#[utoipa::path(
    put,
    path = "/api/content/{id}",
    tag = "content",
    params(("id" = i64, Path, description = "Content id")),
    request_body = ContentRequest,
    responses(
        (status = 200, description = "Content updated", body = ContentResponse),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 404, description = "No content with this id", body = ErrorResponse)
    )
)]
pub async fn update_content(
    service: web::Data<ContentService>,
    id: web::Path<i64>,
    req: web::Json<ContentRequest>,
) -> Result<HttpResponse> {
    let payload = req.into_inner().into_validated()?;
    let updated = service.update(id.into_inner(), payload).await?;
    Ok(HttpResponse::Ok().json(updated))
}

/// Delete content
#[utoipa::path(
    delete,
    path = "/api/content/{id}",
    tag = "content",
    params(("id" = i64, Path, description = "Content id")),
    responses(
        (status = 204, description = "Content deleted"),
        (status = 404, description = "No content with this id", body = ErrorResponse)
    )
)]
pub async fn delete_content(
    service: web::Data<ContentService>,
    id: web::Path<i64>,
) -> Result<HttpResponse> {
    service.delete(id.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
