//! Service Layer
//!
//! Business logic for registration, customers and file uploads.

pub mod customer;
pub mod file;
pub mod registration;

// Re-export services
pub use customer::{CustomerService, SavedCustomer};
pub use file::{FileService, FileUploadOutcome};
pub use registration::{
    RegisteredAccount, RegistrationError, RegistrationResult, RegistrationService,
};
