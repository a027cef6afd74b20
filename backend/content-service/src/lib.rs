/// Content Service Library
///
/// Stores text documents (title + body) and serves create, read, update,
/// delete, list and title-search endpoints under `/api/content`.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers and route registration
/// - `models`: Stored entity, request payload validation, response view
/// - `services`: Business logic layer
/// - `db`: `ContentStore` trait with PostgreSQL and in-memory implementations
/// - `middleware`: Request timing middleware
/// - `error`: Error types and HTTP error rendering
/// - `config`: Configuration management
/// - `metrics`: Prometheus collectors
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod models;
pub mod openapi;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};
