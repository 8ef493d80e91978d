//! Structured Response Envelope
//!
//! The registration and login endpoints always answer with transport status
//! 200 and carry the real outcome in the body's `statusCode` and `status`
//! fields. Existing clients depend on this shape.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Outcome label carried in the envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseStatus {
    /// Operation succeeded
    Success,
    /// Request rejected (validation or authentication)
    Failed,
    /// Operation attempted but the store or payload handling broke
    Failure,
}

/// Envelope returned by the registration and login endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseMessage<T> {
    pub status_code: u16,
    pub status: ResponseStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ResponseMessage<T> {
    /// 201 / SUCCESS with a payload
    pub fn created(message: impl Into<String>, data: T) -> Self {
        Self {
            status_code: StatusCode::CREATED.as_u16(),
            status: ResponseStatus::Success,
            message: message.into(),
            data: Some(data),
        }
    }

    /// 400 / FAILED without a payload
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status_code: StatusCode::BAD_REQUEST.as_u16(),
            status: ResponseStatus::Failed,
            message: message.into(),
            data: None,
        }
    }

    /// 500 / FAILURE without a payload
    pub fn internal_failure(message: impl Into<String>) -> Self {
        Self {
            status_code: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
            status: ResponseStatus::Failure,
            message: message.into(),
            data: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == ResponseStatus::Success
    }
}

impl<T: Serialize> IntoResponse for ResponseMessage<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}
