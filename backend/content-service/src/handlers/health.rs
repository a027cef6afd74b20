/// Health probes - liveness, readiness and a summary endpoint
use crate::services::ContentService;
use actix_web::{web, HttpResponse};
use chrono::Utc;
use serde::Serialize;
use std::collections::HashMap;
use std::time::Instant;

/// Probe bodies never carry the store's own error text
const STORE_UNAVAILABLE: &str = "Content store unavailable";

#[derive(Serialize, Clone)]
#[serde(rename_all = "lowercase")]
enum ComponentStatus {
    Healthy,
    Unhealthy,
}

#[derive(Serialize)]
struct ComponentCheck {
    status: ComponentStatus,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    latency_ms: Option<u64>,
}

#[derive(Serialize)]
struct ReadinessResponse {
    ready: bool,
    status: ComponentStatus,
    checks: HashMap<String, ComponentCheck>,
    timestamp: String,
}

pub async fn health_summary(service: web::Data<ContentService>) -> HttpResponse {
    match service.health_check().await {
        Ok(_) => HttpResponse::Ok().json(serde_json::json!({
            "status": "ok",
            "service": "content-service",
            "version": env!("CARGO_PKG_VERSION")
        })),
        Err(e) => {
            tracing::error!(error = %e, "health check: content store unavailable");
            HttpResponse::ServiceUnavailable().json(serde_json::json!({
                "status": "unhealthy",
                "error": STORE_UNAVAILABLE,
                "service": "content-service"
            }))
        }
    }
}

pub async fn readiness_check(service: web::Data<ContentService>) -> HttpResponse {
    let start = Instant::now();
    let result = service.health_check().await;
    let latency_ms = Some(start.elapsed().as_millis() as u64);

    let ready = result.is_ok();
    let store_check = match result {
        Ok(_) => ComponentCheck {
            status: ComponentStatus::Healthy,
            message: "Content store reachable".to_string(),
            latency_ms,
        },
        Err(e) => {
            tracing::error!(error = %e, "readiness check: content store unavailable");
            ComponentCheck {
                status: ComponentStatus::Unhealthy,
                message: STORE_UNAVAILABLE.to_string(),
                latency_ms,
            }
        }
    };

    let mut checks = HashMap::new();
    checks.insert("content_store".to_string(), store_check);

    let response = ReadinessResponse {
        ready,
        status: if ready {
            ComponentStatus::Healthy
        } else {
            ComponentStatus::Unhealthy
        },
        checks,
        timestamp: Utc::now().to_rfc3339(),
    };

    if ready {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

pub async fn liveness_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({"alive": true}))
}

/// Register `/api/health`, `/api/health/ready` and `/api/health/live`
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/health", web::get().to(health_summary))
        .route("/api/health/ready", web::get().to(readiness_check))
        .route("/api/health/live", web::get().to(liveness_check));
}
