//! User Account Model
//!
//! Registered user accounts and the credential-bearing record the store works with.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User account representation for external API responses
///
/// This struct never carries the encoded password. All datetime fields use UTC.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    /// Identifier generated by the store on creation
    pub id: i64,

    /// Optional given name
    pub first_name: Option<String>,

    /// Optional family name
    pub last_name: Option<String>,

    /// Email address used as the login key, stored verbatim
    pub email: String,

    /// Optional reference to an external contact record (not validated)
    pub contact_id: Option<i64>,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the account was last modified
    pub updated_at: DateTime<Utc>,
}

/// Stored user account including the encoded credential
///
/// Used by the store and the login check. It's never serialized into API responses.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserAccountRecord {
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: String,

    /// Base64 encoding of the raw password. Reversible, not a hash.
    pub password_encoded: String,

    pub contact_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Account data handed to the store for insertion
#[derive(Debug, Clone, PartialEq)]
pub struct NewUserAccount {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: String,
    pub password_encoded: String,
    pub contact_id: Option<i64>,
}

impl From<UserAccountRecord> for UserAccount {
    /// Strips the encoded password so it can't leak into responses
    fn from(record: UserAccountRecord) -> Self {
        UserAccount {
            id: record.id,
            first_name: record.first_name,
            last_name: record.last_name,
            email: record.email,
            contact_id: record.contact_id,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}
