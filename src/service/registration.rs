//! Registration Service Implementation
//!
//! Core business logic for user registration and login.

use std::sync::Arc;
use thiserror::Error;

use crate::database::{AttachmentStore, StoreError, UserStore};
use crate::models::{LoginRequest, NewAttachment, NewUserAccount, UserAccount, UserRegData};
use crate::utils::{
    credentials::{encode_password, password_matches},
    validation::require_credentials,
};

/// Custom error types for the registration service
#[derive(Error, Debug)]
pub enum RegistrationError {
    /// Email or password missing or blank; nothing was written or read
    #[error("Email and Password cannot be empty")]
    MissingCredentials,

    /// Unknown email or wrong password. The two cases are not distinguished.
    #[error("Invalid Email and Password")]
    InvalidCredentials,

    /// Request payload could not be decoded
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    /// Store operation failed
    #[error("{0}")]
    Store(#[from] StoreError),
}

/// Result type for registration service operations
pub type RegistrationResult<T> = Result<T, RegistrationError>;

/// Outcome of a registration that carried file attachments
#[derive(Debug, Clone)]
pub struct RegisteredAccount {
    /// The created account
    pub account: UserAccount,

    /// Ids of the attachments that were stored, in upload order
    pub attachment_ids: Vec<i64>,

    /// Number of attachments whose insert failed and was skipped
    pub failed_attachments: usize,
}

/// Registration and login service
///
/// Stateless apart from its injected store handles.
#[derive(Clone)]
pub struct RegistrationService {
    users: Arc<dyn UserStore>,
    attachments: Arc<dyn AttachmentStore>,
}

impl RegistrationService {
    /// Creates a new RegistrationService over the given stores
    pub fn new(users: Arc<dyn UserStore>, attachments: Arc<dyn AttachmentStore>) -> Self {
        Self { users, attachments }
    }

    /// Registers a new user account
    pub async fn register(&self, request: UserRegData) -> RegistrationResult<UserAccount> {
        let new_user = Self::prepare_account(request)?;

        let record = self.users.create_user(new_user).await.map_err(|e| {
            log::error!("Failed to persist user registration: {}", e);
            RegistrationError::Store(e)
        })?;

        log::info!("Registered user account {}", record.id);
        Ok(record.into())
    }

    /// Registers a new user account and stores each attached file
    ///
    /// Attachments are inserted one by one after the account exists. A failed
    /// insert is logged and skipped; it rolls back neither the account nor the
    /// attachments stored before it.
    pub async fn register_with_attachments(
        &self,
        request: UserRegData,
        files: Vec<NewAttachment>,
    ) -> RegistrationResult<RegisteredAccount> {
        let account = self.register(request).await?;

        let mut attachment_ids = Vec::with_capacity(files.len());
        let mut failed_attachments = 0;

        for file in files {
            let name = file.display_name().to_string();
            match self.attachments.insert_attachment(file).await {
                Ok(stored) => attachment_ids.push(stored.id),
                Err(e) => {
                    failed_attachments += 1;
                    log::warn!(
                        "Skipping attachment '{}' for user {}: {}",
                        name,
                        account.id,
                        e
                    );
                }
            }
        }

        log::info!(
            "Stored {} attachment(s) for user {} ({} failed)",
            attachment_ids.len(),
            account.id,
            failed_attachments
        );

        Ok(RegisteredAccount {
            account,
            attachment_ids,
            failed_attachments,
        })
    }

    /// Checks an email and password pair against the stored account
    ///
    /// No session or token is issued.
    pub async fn login(&self, request: LoginRequest) -> RegistrationResult<UserAccount> {
        let (email, password) =
            require_credentials(request.email.as_deref(), request.password.as_deref())
                .ok_or(RegistrationError::MissingCredentials)?;

        let record = self
            .users
            .find_user_by_email(email)
            .await?
            .ok_or(RegistrationError::InvalidCredentials)?;

        if !password_matches(&record.password_encoded, password) {
            return Err(RegistrationError::InvalidCredentials);
        }

        log::info!("User {} logged in", record.id);
        Ok(record.into())
    }

    /// Retrieves a user account by id
    pub async fn get_user(&self, id: i64) -> RegistrationResult<Option<UserAccount>> {
        Ok(self.users.find_user_by_id(id).await?.map(Into::into))
    }

    /// Retrieves the account a login with this email would check against
    pub async fn find_user_by_email(
        &self,
        email: &str,
    ) -> RegistrationResult<Option<UserAccount>> {
        Ok(self.users.find_user_by_email(email).await?.map(Into::into))
    }

    /// Health check for the underlying store
    pub async fn health_check(&self) -> Result<(), StoreError> {
        self.users.health_check().await
    }

    fn prepare_account(request: UserRegData) -> RegistrationResult<NewUserAccount> {
        let (email, password) =
            require_credentials(request.email.as_deref(), request.password.as_deref())
                .ok_or(RegistrationError::MissingCredentials)?;

        Ok(NewUserAccount {
            first_name: request.first_name.clone(),
            last_name: request.last_name.clone(),
            email: email.to_string(),
            password_encoded: encode_password(password),
            contact_id: request.contact_id,
        })
    }
}
