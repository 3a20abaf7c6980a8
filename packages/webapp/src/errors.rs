use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use std::fmt;

const GENERIC_MESSAGE: &str = "Something went wrong on our end";

/// Error returned by handlers when a request cannot be completed
#[derive(Debug)]
pub struct AppError {
    pub message: String,
    /// Shown to the client only when set
    pub details: Option<String>,
}

impl AppError {
    /// Logs the error and hides its details unless `display_details` is on
    pub fn internal<E: fmt::Display>(error: E, display_details: bool) -> Self {
        let message = error.to_string();
        tracing::error!(error = %message, "request aborted");
        AppError {
            details: display_details.then(|| message.clone()),
            message,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message.as_str())
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        let message = self.details.as_deref().unwrap_or(GENERIC_MESSAGE);
        HttpResponse::build(self.status_code()).json(json!({
            "error": "Internal Server Error",
            "message": message,
        }))
    }
}
