//! Utilities Module
//!
//! Shared utilities for error handling, credential encoding and input
//! validation used throughout the bookstore service.

pub mod credentials;
pub mod error;
pub mod validation;

// Re-export commonly used utilities
pub use credentials::{decode_password, encode_password, password_matches};
pub use error::{AppError, AppResult, ErrorResponse};
pub use validation::*;
