//! Bookstore Service Library
//!
//! Backend for an online bookstore: customer self-registration (optionally
//! with attached files), credential checks on login, plain file uploads and
//! customer records.
//!
//! # Features
//!
//! - **Registration**: accounts created from JSON or multipart requests
//! - **Attachments**: files stored alongside a registration or uploaded alone
//! - **Login**: credential check answering with the stored account
//! - **Response Envelope**: registration and login outcomes travel in the body
//! - **Flexible Router**: configurable endpoints via RouterBuilder pattern
//! - **Pluggable Storage**: PostgreSQL through SQLx or an in-memory store
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use bookstore_service::{
//!     api::{AppState, RouterBuilder},
//!     database::{DatabaseConfig, PgStore},
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env()?;
//!     let pool = config.create_pool().await?;
//!     DatabaseConfig::run_migrations(&pool).await?;
//!
//!     let state = AppState::from_store(Arc::new(PgStore::new(pool)));
//!
//!     // Only registration and login
//!     let app = RouterBuilder::with_registration_routes()
//!         .build()
//!         .with_state(state);
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//!     axum::serve(listener, app).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - **API Layer**: HTTP handlers and configurable route definitions
//! - **Service Layer**: registration, customer and file logic
//! - **Models**: data structures and the response envelope
//! - **Database**: store traits with PostgreSQL and in-memory backends
//! - **Utils**: credential encoding, validation and error handling

/// HTTP API layer with handlers and configurable routing
pub mod api;

/// Configuration loaded from the environment
pub mod config;

/// Store traits, backends and connection management
pub mod database;

/// Data models and request/response structures
pub mod models;

/// Business logic for registration, customers and uploads
pub mod service;

/// Shared utilities for credentials, validation and error handling
pub mod utils;

// Re-export commonly used types for convenient access
pub use api::{create_routes, AppState, RouterBuilder};
pub use models::{
    Attachment, Customer, CustomerRequest, LoginRequest, NewAttachment, ResponseMessage,
    ResponseStatus, UserAccount, UserRegData,
};
pub use service::{CustomerService, FileService, RegistrationError, RegistrationService};
pub use utils::error::{AppError, AppResult, ErrorResponse};

// Re-export database utilities for configuration
pub use database::{DatabaseConfig, DatabasePool, MemoryStore, PgStore, StoreError};

// Re-export configuration system
pub use config::{env, AppConfig, ServerConfig, StorageBackend};

/// Library version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
