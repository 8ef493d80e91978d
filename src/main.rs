//! Bookstore Service Server
//!
//! Runs the registration, login, upload and customer endpoints over the
//! storage backend selected by `STORAGE_BACKEND`.

use std::sync::Arc;

use axum::http::HeaderValue;
use dotenv::dotenv;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use bookstore_service::{
    api::{AppState, RouterBuilder},
    config::{AppConfig, ServerConfig, StorageBackend},
    database::{DatabaseConfig, MemoryStore, PgStore},
    AppError,
};

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if server.allows_any_origin() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = server
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                log::warn!("Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(origins))
}

async fn build_state(config: &AppConfig) -> Result<AppState, Box<dyn std::error::Error>> {
    match config.storage {
        StorageBackend::Postgres => {
            let db_config = config.database.as_ref().ok_or_else(|| {
                AppError::Configuration("Missing database configuration".to_string())
            })?;
            let pool = db_config.create_pool().await?;

            log::info!("🔄 Running database migrations...");
            DatabaseConfig::run_migrations(&pool).await?;
            log::info!("✅ Database migrations completed");

            Ok(AppState::from_store(Arc::new(PgStore::new(pool))))
        }
        StorageBackend::Memory => {
            log::warn!("⚠️  Using in-memory storage, data is lost on shutdown");
            Ok(AppState::from_store(Arc::new(MemoryStore::new())))
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv().ok();

    let config = AppConfig::from_env()?;
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.server.log_level.as_str()),
    )
    .init();

    log::info!(
        "🚀 Starting Bookstore Service v{}",
        bookstore_service::VERSION
    );

    config.validate()?;
    log::info!("✅ Configuration loaded and validated");
    log::info!("   - Storage backend: {}", config.storage);
    log::info!(
        "   - Upload limit: {} bytes",
        config.server.max_upload_bytes
    );

    let app_state = build_state(&config).await?;

    let app = RouterBuilder::with_all_routes()
        .upload_limit(config.server.max_upload_bytes)
        .build()
        .with_state(app_state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(&config.server))
                .into_inner(),
        );

    let bind_addr = config.server.bind_address();
    log::info!("🌐 Starting server on {}", bind_addr);

    log::info!("📋 API Endpoints:");
    log::info!("     GET    /health - Health check");
    log::info!("     POST   /userRegister - Register a user");
    log::info!("     POST   /userRegisterwithfile - Register a user with attachments");
    log::info!("     POST   /login - Check credentials");
    log::info!("     POST   /upload - Upload one file");
    log::info!("     POST   /uploadMultiple - Upload several files");
    log::info!("     POST   /rest/createOrUpdateCustomer - Save a customer");
    log::info!("     GET    /rest/customer/{{id}} - Get a customer");
    log::info!("     GET    /rest/getAllCustomers - List customers");
    log::info!("     DELETE /rest/deleteCustomer/{{id}} - Delete a customer");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
