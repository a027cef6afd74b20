// HTTP-level tests for the /api/content routes.
//
// The full route table is mounted on an in-memory content store, so these
// run without PostgreSQL.

use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use async_trait::async_trait;
use content_service::db::{ContentStore, MemoryContentStore};
use content_service::handlers;
use content_service::models::{Content, ContentResponse};
use content_service::services::ContentService;
use content_service::{AppError, Result};
use serde_json::{json, Value};
use std::sync::Arc;

const DB_CAUSE: &str = "password authentication failed for user \"cms\" host 10.0.0.5";

/// Store whose backend is unreachable
struct UnreachableStore;

#[async_trait]
impl ContentStore for UnreachableStore {
    async fn insert(&self, _title: &str, _body: &str) -> Result<Content> {
        Err(AppError::Storage(DB_CAUSE.to_string()))
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<Content>> {
        Err(AppError::Storage(DB_CAUSE.to_string()))
    }

    async fn find_all(&self) -> Result<Vec<Content>> {
        Err(AppError::Storage(DB_CAUSE.to_string()))
    }

    async fn find_by_title_contains(&self, _fragment: &str) -> Result<Vec<Content>> {
        Err(AppError::Storage(DB_CAUSE.to_string()))
    }

    async fn exists_by_id(&self, _id: i64) -> Result<bool> {
        Err(AppError::Storage(DB_CAUSE.to_string()))
    }

    async fn update(&self, _id: i64, _title: &str, _body: &str) -> Result<Option<Content>> {
        Err(AppError::Storage(DB_CAUSE.to_string()))
    }

    async fn delete_by_id(&self, _id: i64) -> Result<bool> {
        Err(AppError::Storage(DB_CAUSE.to_string()))
    }

    async fn health_check(&self) -> Result<()> {
        Err(AppError::Storage(DB_CAUSE.to_string()))
    }
}

async fn init_app(
) -> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error> {
    init_app_with(Arc::new(MemoryContentStore::new())).await
}

async fn init_app_with(
    store: Arc<dyn ContentStore>,
) -> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error> {
    let service = ContentService::new(store);
    test::init_service(
        App::new()
            .app_data(web::Data::new(service))
            .configure(handlers::health::configure)
            .configure(handlers::configure),
    )
    .await
}

async fn create<S>(app: &S, title: &str, body: &str) -> ContentResponse
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let req = test::TestRequest::post()
        .uri("/api/content")
        .set_json(json!({ "title": title, "body": body }))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    test::read_body_json(resp).await
}

#[actix_web::test]
async fn complete_content_lifecycle() {
    let app = init_app().await;

    let created = create(&app, "Integration Test Title", "Integration Test Body").await;
    assert_eq!(created.title, "Integration Test Title");
    assert_eq!(created.created_at, created.updated_at);

    // Read back
    let req = test::TestRequest::get()
        .uri(&format!("/api/content/{}", created.id))
        .to_request();
    let fetched: ContentResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched, created);

    // Update
    let req = test::TestRequest::put()
        .uri(&format!("/api/content/{}", created.id))
        .set_json(json!({ "title": "Updated Title", "body": "Updated Body" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: ContentResponse = test::read_body_json(resp).await;
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "Updated Title");
    assert_eq!(updated.body, "Updated Body");
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);

    let req = test::TestRequest::get()
        .uri(&format!("/api/content/{}", created.id))
        .to_request();
    let fetched: ContentResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched, updated);

    // Search
    let req = test::TestRequest::get()
        .uri("/api/content?search=Updated")
        .to_request();
    let found: Vec<ContentResponse> = test::call_and_read_body_json(&app, req).await;
    assert!(found.iter().any(|c| c.title == "Updated Title"));

    // Delete
    let req = test::TestRequest::delete()
        .uri(&format!("/api/content/{}", created.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    let body = test::read_body(resp).await;
    assert!(body.is_empty());

    let req = test::TestRequest::get()
        .uri(&format!("/api/content/{}", created.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn created_view_uses_camel_case_timestamps() {
    let app = init_app().await;

    let req = test::TestRequest::post()
        .uri("/api/content")
        .set_json(json!({ "title": "Wire", "body": "Shape" }))
        .to_request();
    let json: Value = test::call_and_read_body_json(&app, req).await;

    assert!(json["id"].is_i64());
    assert_eq!(json["title"], "Wire");
    assert_eq!(json["body"], "Shape");
    assert!(json["createdAt"].is_string());
    assert!(json["updatedAt"].is_string());
}

#[actix_web::test]
async fn search_is_case_insensitive_substring() {
    let app = init_app().await;

    let spring = create(&app, "Spring Boot Tutorial", "B1").await;
    create(&app, "Java Tutorial", "B2").await;

    let req = test::TestRequest::get()
        .uri("/api/content?search=spring")
        .to_request();
    let found: Vec<ContentResponse> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(found, vec![spring]);

    let req = test::TestRequest::get()
        .uri("/api/content?search=TUTORIAL")
        .to_request();
    let found: Vec<ContentResponse> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(found.len(), 2);

    let req = test::TestRequest::get()
        .uri("/api/content?search=python")
        .to_request();
    let found: Vec<ContentResponse> = test::call_and_read_body_json(&app, req).await;
    assert!(found.is_empty());
}

#[actix_web::test]
async fn empty_search_lists_everything() {
    let app = init_app().await;

    create(&app, "First", "1").await;
    create(&app, "Second", "2").await;

    let req = test::TestRequest::get().uri("/api/content").to_request();
    let all: Vec<ContentResponse> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(all.len(), 2);

    let req = test::TestRequest::get()
        .uri("/api/content?search=")
        .to_request();
    let empty_search: Vec<ContentResponse> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(empty_search, all);
}

#[actix_web::test]
async fn create_with_empty_title_returns_400() {
    let app = init_app().await;

    let req = test::TestRequest::post()
        .uri("/api/content")
        .set_json(json!({ "title": "", "body": "x" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let json: Value = test::read_body_json(resp).await;
    assert_eq!(json["status"], 400);
    assert_eq!(json["message"], "Validation failed");
    let errors = json["errors"].as_array().unwrap();
    assert!(errors
        .iter()
        .any(|e| e["field"] == "title" && e["message"] == "Title is required"));

    // Nothing was stored
    let req = test::TestRequest::get().uri("/api/content").to_request();
    let all: Vec<ContentResponse> = test::call_and_read_body_json(&app, req).await;
    assert!(all.is_empty());
}

#[actix_web::test]
async fn validation_reports_every_field() {
    let app = init_app().await;

    let req = test::TestRequest::post()
        .uri("/api/content")
        .set_json(json!({ "title": "a".repeat(256) }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let json: Value = test::read_body_json(resp).await;
    let errors = json["errors"].as_array().unwrap();
    assert!(errors.iter().any(|e| e["field"] == "body"
        && e["message"] == "Body is required"));
    assert!(errors.iter().any(|e| e["field"] == "title"
        && e["message"] == "Title must not exceed 255 characters"));
}

#[actix_web::test]
async fn update_validates_before_lookup() {
    let app = init_app().await;

    // Invalid payload against a missing id is rejected as invalid first
    let req = test::TestRequest::put()
        .uri("/api/content/9999")
        .set_json(json!({ "title": " ", "body": "x" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::put()
        .uri("/api/content/9999")
        .set_json(json!({ "title": "T", "body": "B" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn get_missing_returns_404_body() {
    let app = init_app().await;

    let req = test::TestRequest::get()
        .uri("/api/content/9999")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let json: Value = test::read_body_json(resp).await;
    assert_eq!(json["status"], 404);
    assert_eq!(json["message"], "Content not found with id: 9999");
}

#[actix_web::test]
async fn second_delete_returns_404() {
    let app = init_app().await;
    let created = create(&app, "Doomed", "soon gone").await;

    let uri = format!("/api/content/{}", created.id);
    let resp = test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let json: Value = test::read_body_json(resp).await;
    assert_eq!(
        json["message"],
        format!("Content not found with id: {}", created.id)
    );
}

#[actix_web::test]
async fn ids_are_not_reused_after_delete() {
    let app = init_app().await;
    let first = create(&app, "One", "1").await;

    let uri = format!("/api/content/{}", first.id);
    let resp = test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let second = create(&app, "Two", "2").await;
    assert_ne!(second.id, first.id);
}

#[actix_web::test]
async fn malformed_input_returns_400_body() {
    let app = init_app().await;

    let req = test::TestRequest::post()
        .uri("/api/content")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let json: Value = test::read_body_json(resp).await;
    assert_eq!(json["status"], 400);

    let req = test::TestRequest::get()
        .uri("/api/content/not-a-number")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let json: Value = test::read_body_json(resp).await;
    assert_eq!(json["status"], 400);
}

#[actix_web::test]
async fn health_probes_report_ready() {
    let app = init_app().await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/health/live").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/api/health/ready").to_request();
    let json: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(json["ready"], true);
    assert_eq!(json["checks"]["content_store"]["status"], "healthy");
}

#[actix_web::test]
async fn health_summary_reports_ok() {
    let app = init_app().await;

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let json: Value = test::read_body_json(resp).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["service"], "content-service");
}

#[actix_web::test]
async fn unreachable_store_yields_503_without_cause() {
    let app = init_app_with(Arc::new(UnreachableStore)).await;

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = test::read_body(resp).await;
    let text = String::from_utf8_lossy(&body);
    assert!(!text.contains("password"), "summary leaked: {text}");
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "unhealthy");
    assert_eq!(json["error"], "Content store unavailable");

    let req = test::TestRequest::get().uri("/api/health/ready").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = test::read_body(resp).await;
    let text = String::from_utf8_lossy(&body);
    assert!(!text.contains("10.0.0.5"), "readiness leaked: {text}");
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["ready"], false);
    assert_eq!(json["checks"]["content_store"]["status"], "unhealthy");
    assert_eq!(
        json["checks"]["content_store"]["message"],
        "Content store unavailable"
    );

    // Liveness does not depend on the store
    let req = test::TestRequest::get().uri("/api/health/live").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn storage_failure_on_content_route_hides_cause() {
    let app = init_app_with(Arc::new(UnreachableStore)).await;

    let req = test::TestRequest::get().uri("/api/content").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json: Value = test::read_body_json(resp).await;
    assert_eq!(json["status"], 500);
    assert_eq!(json["message"], "Internal server error");
}
