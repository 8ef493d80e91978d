//! Attachment Model
//!
//! Binary files stored in the `files` table, either uploaded directly or sent
//! alongside a registration.

use chrono::{DateTime, Utc};

/// Stored file record
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Attachment {
    pub id: i64,

    /// Original file name as sent by the client
    pub file_name: Option<String>,

    /// Content type as sent by the client
    pub file_type: Option<String>,

    /// Raw file content
    pub data: Vec<u8>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// File metadata and content received from a multipart part, copied verbatim
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewAttachment {
    pub file_name: Option<String>,
    pub file_type: Option<String>,
    pub data: Vec<u8>,
}

impl NewAttachment {
    pub fn new(file_name: Option<String>, file_type: Option<String>, data: Vec<u8>) -> Self {
        Self {
            file_name,
            file_type,
            data,
        }
    }

    /// Name used in log lines and upload messages
    pub fn display_name(&self) -> &str {
        self.file_name.as_deref().unwrap_or("<unnamed>")
    }
}
