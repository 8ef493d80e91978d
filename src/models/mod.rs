//! Data Models Module
//!
//! Data structures used throughout the bookstore service: user accounts,
//! attachments, customers, request payloads and the response envelope.

pub mod attachment;
pub mod customer;
pub mod requests;
pub mod response;
pub mod user;

// Re-export commonly used types
pub use attachment::*;
pub use customer::*;
pub use requests::*;
pub use response::*;
pub use user::*;
