//! Typed errors for every layer, plus HTTP mapping for the dev backend.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: &'static str, message: String },
    #[error("invalid api url '{0}'")]
    InvalidUrl(String),
}

/// Failure of a single data-service call.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("api error: {status} - {message}")]
    Api { status: u16, message: String },
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid url: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// HTTP status for `Api` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Why a page action did not complete.
#[derive(Error, Debug)]
pub enum ActionError {
    #[error("validation: {0}")]
    Validation(String),
    #[error("{0} not loaded yet")]
    NotLoaded(&'static str),
    #[error("no {kind} row {key}")]
    NoSuchRow { kind: &'static str, key: String },
    #[error(transparent)]
    Client(#[from] ClientError),
}

impl ActionError {
    pub fn no_row(kind: &'static str, key: impl ToString) -> Self {
        Self::NoSuchRow {
            kind,
            key: key.to_string(),
        }
    }
}

pub type ActionResult = Result<(), ActionError>;

/// Errors raised by the in-memory dev backend.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("method not allowed: {0}")]
    MethodNotAllowed(String),
    #[error("seed: {0}")]
    Seed(String),
    #[error("internal: {0}")]
    Internal(String),
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

pub fn error_body(code: &str, message: String) -> ErrorBody {
    ErrorBody {
        error: ErrorDetail {
            code: code.to_string(),
            message,
        },
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            AppError::MethodNotAllowed(_) => (StatusCode::METHOD_NOT_ALLOWED, "method_not_allowed"),
            AppError::Seed(_) => (StatusCode::INTERNAL_SERVER_ERROR, "seed_error"),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        };
        (status, Json(error_body(code, self.to_string()))).into_response()
    }
}
