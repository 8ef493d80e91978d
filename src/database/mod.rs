//! Database Module
//!
//! Connection management, store traits and the PostgreSQL and in-memory
//! store backends.

pub mod connection;
pub mod memory;
pub mod postgres;
pub mod store;

// Re-export commonly used types
pub use connection::{DatabaseConfig, DatabasePool};
pub use memory::MemoryStore;
pub use postgres::PgStore;
pub use store::{AttachmentStore, CustomerStore, StoreError, StoreResult, UserStore};
