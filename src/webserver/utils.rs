/// Response envelope helpers shared by all route handlers
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::{
    errors::JournalError,
    logger::{self, LogTag},
};

/// Success envelope: `{ data, message, error: null }`
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub message: String,
    pub error: Option<String>,
}

/// Error envelope: `{ message, code }`
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    pub code: String,
}

pub fn success_response<T: Serialize>(data: T, message: &str) -> Response {
    (
        StatusCode::OK,
        Json(ApiResponse {
            data,
            message: message.to_string(),
            error: None,
        }),
    )
        .into_response()
}

pub fn error_response(status: StatusCode, code: &str, message: &str) -> Response {
    (
        status,
        Json(ErrorResponse {
            message: message.to_string(),
            code: code.to_string(),
        }),
    )
        .into_response()
}

/// Map a service error onto its status code and the error envelope
pub fn journal_error_response(err: &JournalError) -> Response {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    if err.is_client_error() {
        logger::debug(LogTag::Webserver, &format!("{} {}", status.as_u16(), err));
    } else {
        logger::error(LogTag::Webserver, &format!("{} {}", status.as_u16(), err));
    }

    error_response(status, err.code(), &err.to_string())
}
