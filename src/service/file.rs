//! File Service
//!
//! Stores uploaded files in the `files` table, independently of any registration.

use std::sync::Arc;

use crate::database::AttachmentStore;
use crate::models::{Attachment, NewAttachment};
use crate::utils::error::AppResult;

/// Per-file result of a multi-file upload
#[derive(Debug, Clone, PartialEq)]
pub struct FileUploadOutcome {
    pub file_name: String,
    pub stored_id: Option<i64>,
    pub message: String,
}

impl FileUploadOutcome {
    pub fn is_stored(&self) -> bool {
        self.stored_id.is_some()
    }
}

#[derive(Clone)]
pub struct FileService {
    store: Arc<dyn AttachmentStore>,
}

impl FileService {
    pub fn new(store: Arc<dyn AttachmentStore>) -> Self {
        Self { store }
    }

    pub async fn store_file(&self, file: NewAttachment) -> AppResult<Attachment> {
        let stored = self.store.insert_attachment(file).await?;
        log::info!(
            "Stored file '{}' as {} ({} bytes)",
            stored.file_name.as_deref().unwrap_or("<unnamed>"),
            stored.id,
            stored.data.len()
        );
        Ok(stored)
    }

    /// Stores each file on its own; one failure does not stop the others
    pub async fn store_files(&self, files: Vec<NewAttachment>) -> Vec<FileUploadOutcome> {
        let mut outcomes = Vec::with_capacity(files.len());

        for file in files {
            let file_name = file.display_name().to_string();
            let outcome = match self.store_file(file).await {
                Ok(stored) => FileUploadOutcome {
                    message: format!("File inserted successfully: {}", file_name),
                    file_name,
                    stored_id: Some(stored.id),
                },
                Err(e) => {
                    log::warn!("Failed to store file '{}': {}", file_name, e);
                    FileUploadOutcome {
                        message: format!("Failed to upload file: {}", e),
                        file_name,
                        stored_id: None,
                    }
                }
            };
            outcomes.push(outcome);
        }

        outcomes
    }
}
