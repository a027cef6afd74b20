/// OpenAPI documentation for the Content Service
use crate::error::{ErrorResponse, FieldViolation};
use crate::handlers::content;
use crate::models::{ContentRequest, ContentResponse};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Content Service API",
        version = "1.0.0",
        description = "Stores text documents (title + body) and exposes create, read, update, delete, list and case-insensitive title search.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Development server"),
    ),
    paths(
        content::list_content,
        content::get_content,
        content::create_content,
        content::update_content,
        content::delete_content,
    ),
    components(schemas(ContentRequest, ContentResponse, ErrorResponse, FieldViolation)),
    tags(
        (name = "content", description = "Content documents"),
    ),
)]
pub struct ApiDoc;

impl ApiDoc {
    pub fn openapi_json_path() -> &'static str {
        "/api/openapi.json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_content_routes() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/content"));
        assert!(doc.paths.paths.contains_key("/api/content/{id}"));
    }
}
