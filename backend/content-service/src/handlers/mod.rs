/// HTTP handlers for content endpoints
///
/// Write handlers run payload validation before calling the service.
/// `configure` mounts the `/api/content` scope together with the JSON and
/// path extractor settings, so the server and tests share one route table.
pub mod content;
pub mod health;

pub use content::{create_content, delete_content, get_content, list_content, update_content};

use crate::error::AppError;
use actix_web::{web, HttpRequest};

fn json_error(err: actix_web::error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(format!("Malformed request body: {}", err)).into()
}

fn query_error(err: actix_web::error::QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(format!("Invalid query string: {}", err)).into()
}

fn path_error(err: actix_web::error::PathError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(format!("Invalid path parameter: {}", err)).into()
}

/// Register the content routes on an actix `ServiceConfig`
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/content")
            .app_data(web::JsonConfig::default().error_handler(json_error))
            .app_data(web::PathConfig::default().error_handler(path_error))
            .app_data(web::QueryConfig::default().error_handler(query_error))
            .service(
                web::resource("")
                    .route(web::get().to(list_content))
                    .route(web::post().to(create_content)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_content))
                    .route(web::put().to(update_content))
                    .route(web::delete().to(delete_content)),
            ),
    );
}
