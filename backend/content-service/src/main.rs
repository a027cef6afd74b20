use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use content_service::config::{LogFormat, StoreBackend};
use content_service::db::{ContentStore, MemoryContentStore, PgContentStore, MIGRATOR};
use content_service::handlers;
use content_service::middleware::MetricsMiddleware;
use content_service::openapi::ApiDoc;
use content_service::services::ContentService;
use db_pool::{create_pool, run_migrations, DbConfig};
use std::io;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,actix_web=debug,sqlx=warn".into());

    match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        LogFormat::Text => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init(),
    }
}

async fn build_store(config: &content_service::Config) -> io::Result<Arc<dyn ContentStore>> {
    match config.store.backend {
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory content store; data is lost on restart");
            Ok(Arc::new(MemoryContentStore::new()))
        }
        StoreBackend::Postgres => {
            let db_cfg = DbConfig::for_service("content-service", config.database.url.clone());
            db_cfg.log_config();

            let pool = create_pool(db_cfg).await.map_err(|e| {
                io::Error::new(
                    io::ErrorKind::Other,
                    format!("Failed to create database pool: {}", e),
                )
            })?;

            if config.database.run_migrations {
                run_migrations(&pool, &MIGRATOR).await.map_err(|e| {
                    io::Error::new(
                        io::ErrorKind::Other,
                        format!("Failed to run database migrations: {}", e),
                    )
                })?;
            }

            tracing::info!("Connected to database via db-pool crate");
            Ok(Arc::new(PgContentStore::new(pool)))
        }
    }
}

/// Content Service
///
/// # Routes
///
/// - `/api/content` - list, search, create
/// - `/api/content/{id}` - read, update, delete
/// - `/api/health`, `/api/health/ready`, `/api/health/live` - probes
/// - `/metrics` - Prometheus metrics
/// - `/swagger-ui/` - OpenAPI UI
#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();

    let config = match content_service::Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("ERROR: Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_tracing(config.log.format);

    tracing::info!("Starting content-service v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app.env);

    let store = build_store(&config).await?;
    let service = web::Data::new(ContentService::new(store));

    let bind_address = config.bind_address();
    let workers = config.app.workers;
    let allowed_origins = config.cors.allowed_origins.clone();

    tracing::info!("Starting HTTP server at {}", bind_address);

    HttpServer::new(move || {
        let mut cors = Cors::default();
        for origin in allowed_origins.split(',') {
            let origin = origin.trim();
            if origin == "*" {
                cors = cors.allow_any_origin();
            } else if !origin.is_empty() {
                cors = cors.allowed_origin(origin);
            }
        }
        cors = cors.allow_any_method().allow_any_header().max_age(3600);

        App::new()
            .app_data(service.clone())
            .wrap(MetricsMiddleware)
            .wrap(cors)
            .wrap(Logger::default())
            .wrap(tracing_actix_web::TracingLogger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url(ApiDoc::openapi_json_path(), ApiDoc::openapi()),
            )
            .route(
                "/metrics",
                web::get().to(content_service::metrics::serve_metrics),
            )
            .configure(handlers::health::configure)
            .configure(handlers::configure)
    })
    .bind(&bind_address)?
    .workers(workers)
    .run()
    .await?;

    tracing::info!("Content-service shutting down");
    Ok(())
}
