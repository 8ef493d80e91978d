//! Request and Response Models
//!
//! Data structures for API request and response payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::customer::CustomerFields;

/// Registration payload
///
/// Every field is optional at the wire level so that missing credentials are
/// reported as a validation failure instead of a deserialization error.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRegData {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub contact_id: Option<i64>,
}

/// Login payload
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Customer create-or-update payload
///
/// An absent `id` creates a new customer; a present one updates it.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRequest {
    pub id: Option<i64>,

    #[validate(length(max = 255, message = "First name must be at most 255 characters"))]
    pub first_name: Option<String>,

    #[validate(length(max = 255, message = "Last name must be at most 255 characters"))]
    pub last_name: Option<String>,

    #[validate(email(message = "Please enter a valid email address"))]
    pub email: Option<String>,

    #[validate(length(max = 255, message = "Phone must be at most 255 characters"))]
    pub phone: Option<String>,

    #[validate(length(max = 255, message = "Address must be at most 255 characters"))]
    pub address: Option<String>,
}

impl CustomerRequest {
    /// Splits the request into its target id and the fields to persist
    pub fn into_parts(self) -> (Option<i64>, CustomerFields) {
        (
            self.id,
            CustomerFields {
                first_name: self.first_name,
                last_name: self.last_name,
                email: self.email,
                phone: self.phone,
                address: self.address,
            },
        )
    }
}

/// Response for health check
#[derive(Debug, Serialize)]
pub struct HealthCheckResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}
