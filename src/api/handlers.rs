//! HTTP Request Handlers
//!
//! Axum handlers for registration, login and health. Registration and login
//! always answer with transport status 200; the outcome lives in the
//! `ResponseMessage` body.

use std::sync::Arc;

use axum::{
    extract::{
        multipart::{Field, MultipartRejection},
        rejection::JsonRejection,
        Multipart, State,
    },
    Json,
};
use chrono::Utc;

use crate::{
    database::{AttachmentStore, CustomerStore, UserStore},
    models::{
        HealthCheckResponse, LoginRequest, NewAttachment, ResponseMessage, UserAccount,
        UserRegData,
    },
    service::{CustomerService, FileService, RegistrationError, RegistrationService},
    utils::{error::AppResult, validation::messages},
    VERSION,
};

/// Multipart part carrying the JSON registration fields
pub const REGISTRATION_JSON_PART: &str = "userRegDataJson";

/// Multipart part name used for each attached file
pub const FILES_PART: &str = "files";

pub const REGISTERED_MESSAGE: &str = "User Registered Successfully";
pub const LOGGED_IN_MESSAGE: &str =
    "User Login Successfully, welcome to E-commerce online BooksStore";

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub registration_service: Arc<RegistrationService>,
    pub customer_service: Arc<CustomerService>,
    pub file_service: Arc<FileService>,
}

impl AppState {
    /// Builds every service over a single store backend
    pub fn from_store<S>(store: Arc<S>) -> Self
    where
        S: UserStore + AttachmentStore + CustomerStore + 'static,
    {
        Self {
            registration_service: Arc::new(RegistrationService::new(
                store.clone(),
                store.clone(),
            )),
            customer_service: Arc::new(CustomerService::new(store.clone())),
            file_service: Arc::new(FileService::new(store)),
        }
    }
}

/// Standard success response wrapper
#[derive(serde::Serialize)]
pub struct SuccessResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> SuccessResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Maps a registration or login error onto the response envelope
///
/// `operation` prefixes the detail of unexpected failures, e.g. "User Login Failed".
fn failure_message(operation: &str, err: RegistrationError) -> ResponseMessage<UserAccount> {
    match err {
        RegistrationError::MissingCredentials => {
            ResponseMessage::bad_request(messages::EMPTY_CREDENTIALS)
        }
        RegistrationError::InvalidCredentials => {
            ResponseMessage::bad_request(messages::INVALID_CREDENTIALS)
        }
        other => ResponseMessage::internal_failure(format!("{}: {}", operation, other)),
    }
}

fn registration_failure(err: RegistrationError) -> ResponseMessage<UserAccount> {
    failure_message("User Registration Failed", err)
}

/// Register a new user
pub async fn register_user(
    State(state): State<AppState>,
    payload: Result<Json<UserRegData>, JsonRejection>,
) -> ResponseMessage<UserAccount> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            return registration_failure(RegistrationError::MalformedRequest(
                rejection.body_text(),
            ))
        }
    };

    match state.registration_service.register(request).await {
        Ok(account) => ResponseMessage::created(REGISTERED_MESSAGE, account),
        Err(e) => registration_failure(e),
    }
}

/// Register a new user with attached files
///
/// Expects a `userRegDataJson` text part and any number of `files` parts.
pub async fn register_user_with_files(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> ResponseMessage<UserAccount> {
    let multipart = match multipart {
        Ok(multipart) => multipart,
        Err(rejection) => {
            return registration_failure(RegistrationError::MalformedRequest(
                rejection.body_text(),
            ))
        }
    };

    let (request, files) = match read_registration_parts(multipart).await {
        Ok(parts) => parts,
        Err(e) => return registration_failure(e),
    };

    match state
        .registration_service
        .register_with_attachments(request, files)
        .await
    {
        Ok(outcome) => ResponseMessage::created(REGISTERED_MESSAGE, outcome.account),
        Err(e) => registration_failure(e),
    }
}

/// Check user credentials
pub async fn login_user(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ResponseMessage<UserAccount> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            return failure_message(
                "User Login Failed",
                RegistrationError::MalformedRequest(rejection.body_text()),
            )
        }
    };

    match state.registration_service.login(request).await {
        Ok(account) => ResponseMessage::created(LOGGED_IN_MESSAGE, account),
        Err(e) => failure_message("User Login Failed", e),
    }
}

/// Health check endpoint
pub async fn health_check(
    State(state): State<AppState>,
) -> AppResult<Json<SuccessResponse<HealthCheckResponse>>> {
    state.registration_service.health_check().await?;

    let response = HealthCheckResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
        version: VERSION.to_string(),
    };

    Ok(Json(SuccessResponse::new(response)))
}

/// Reads a multipart field into an attachment, copying metadata verbatim
pub(crate) async fn read_file_field(
    field: Field<'_>,
) -> Result<NewAttachment, axum::extract::multipart::MultipartError> {
    let file_name = field.file_name().map(str::to_string);
    let file_type = field.content_type().map(str::to_string);
    let data = field.bytes().await?;

    Ok(NewAttachment::new(file_name, file_type, data.to_vec()))
}

/// Splits a registration multipart body into its JSON fields and files
///
/// A missing JSON part yields empty registration data, which then fails validation.
async fn read_registration_parts(
    mut multipart: Multipart,
) -> Result<(UserRegData, Vec<NewAttachment>), RegistrationError> {
    let malformed = |e: axum::extract::multipart::MultipartError| {
        RegistrationError::MalformedRequest(e.body_text())
    };

    let mut request = None;
    let mut files = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(malformed)? {
        let name = field.name().unwrap_or_default().to_string();

        match name.as_str() {
            REGISTRATION_JSON_PART => {
                let json = field.text().await.map_err(malformed)?;
                let parsed: UserRegData = serde_json::from_str(&json)
                    .map_err(|e| RegistrationError::MalformedRequest(e.to_string()))?;
                request = Some(parsed);
            }
            FILES_PART => files.push(read_file_field(field).await.map_err(malformed)?),
            other => log::debug!("Ignoring unexpected multipart part '{}'", other),
        }
    }

    Ok((request.unwrap_or_default(), files))
}
