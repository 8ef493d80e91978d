//! Store Traits
//!
//! Persistence seams for user accounts, attachments and customers. Services
//! hold these as `Arc<dyn ...>` so the backend (PostgreSQL or in-memory) is
//! chosen once at startup and injected.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{
    Attachment, Customer, CustomerFields, NewAttachment, NewUserAccount, UserAccountRecord,
};

/// Errors raised by store backends
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database operation failed
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Backend rejected the operation for a reason other than a query failure
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// User account persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Inserts a new account; the store assigns id and timestamps
    async fn create_user(&self, user: NewUserAccount) -> StoreResult<UserAccountRecord>;

    async fn find_user_by_id(&self, id: i64) -> StoreResult<Option<UserAccountRecord>>;

    /// Exact, case-sensitive email match. With duplicates, the lowest id wins.
    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<UserAccountRecord>>;

    /// Cheap connectivity probe
    async fn health_check(&self) -> StoreResult<()>;
}

/// Binary file persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AttachmentStore: Send + Sync {
    async fn insert_attachment(&self, attachment: NewAttachment) -> StoreResult<Attachment>;
}

/// Customer persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerStore: Send + Sync {
    async fn insert_customer(&self, fields: CustomerFields) -> StoreResult<Customer>;

    /// Returns `None` when no customer has the given id
    async fn update_customer(
        &self,
        id: i64,
        fields: CustomerFields,
    ) -> StoreResult<Option<Customer>>;

    async fn find_customer_by_id(&self, id: i64) -> StoreResult<Option<Customer>>;

    /// All customers ordered by id
    async fn list_customers(&self) -> StoreResult<Vec<Customer>>;

    /// Returns whether a row was removed
    async fn delete_customer(&self, id: i64) -> StoreResult<bool>;
}
