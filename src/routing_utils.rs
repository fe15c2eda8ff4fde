use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum_macros::FromRequest;
use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::domain::todo::driving_ports::TodoError;
use crate::dto::InvalidInput;

/// Body of every error the API returns
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorMessage {
    #[schema(example = "Element not found: No todo with id 123")]
    pub message: String,
    /// When the error was produced, in the server's local time
    #[schema(value_type = String, format = DateTime, example = "2024-05-21T14:03:12.345678")]
    pub timestamp: NaiveDateTime,
}

/// Any failure that escapes a route handler. This is the only place user-facing error
/// text gets built: the variant picks the status code and the prefix of the message.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Element not found: {0}")]
    NotFound(String),
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("Internal server error: {0:#}")]
    Internal(anyhow::Error),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();
        if status.is_server_error() {
            error!(%status, "{message}");
        } else {
            info!(%status, "{message}");
        }

        (
            status,
            axum::Json(ErrorMessage {
                message,
                timestamp: Local::now().naive_local(),
            }),
        )
            .into_response()
    }
}

impl From<TodoError> for ApiError {
    fn from(value: TodoError) -> Self {
        match value {
            TodoError::NotFound(_) => Self::NotFound(value.to_string()),
            TodoError::PortError(cause) => Self::Internal(cause),
        }
    }
}

impl From<InvalidInput> for ApiError {
    fn from(value: InvalidInput) -> Self {
        match value.first() {
            Some(violation) => Self::BadRequest(violation.message().into_owned()),
            None => Self::BadRequest(value.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(value: JsonRejection) -> Self {
        Self::BadRequest(value.body_text())
    }
}

/// Wrapper for [axum::Json] which reports unreadable request bodies as an [ApiError], so
/// they get the same body as every other failure
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}
