//! API Layer
//!
//! HTTP endpoints for registration, login, file uploads and customers.

pub mod customer_handlers;
pub mod file_handlers;
pub mod handlers;
pub mod routes;

// Re-export commonly used types
pub use handlers::AppState;
pub use routes::{create_routes, RouterBuilder};
