use crate::domain::application::{errors::ApplicationError, models::document::DocumentError};
use crate::inbound::http::cors::RequestOrigin;

use actix_web::http::StatusCode;
use actix_web::HttpResponse;

#[derive(thiserror::Error)]
pub enum AppError {
    #[error("Forbidden: Invalid Origin")]
    ForbiddenOrigin,
    #[error("Method Not Allowed")]
    MethodNotAllowed,
    #[error("Payload Too Large")]
    PayloadTooLarge,
    #[error("Invalid or missing PDF data.")]
    InvalidDocument(#[source] DocumentError),
    #[error("Server email settings are missing. Check environment variables.")]
    MissingSettings,
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl From<ApplicationError> for AppError {
    fn from(error: ApplicationError) -> Self {
        match error {
            ApplicationError::InvalidDocument(e) => AppError::InvalidDocument(e),
            ApplicationError::MissingSettings => AppError::MissingSettings,
            ApplicationError::Unexpected(e) => AppError::Unexpected(e),
        }
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ForbiddenOrigin => StatusCode::FORBIDDEN,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::InvalidDocument(_) => StatusCode::BAD_REQUEST,
            AppError::MissingSettings | AppError::Unexpected(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message sent back to the client. Unexpected failures only reveal
    /// their cause when `debug_errors` is on.
    pub fn client_message(&self, debug_errors: bool) -> String {
        match self {
            AppError::Unexpected(e) if debug_errors => format!("{:#}", e),
            AppError::Unexpected(_) => "Internal Server Error".to_string(),
            other => other.to_string(),
        }
    }

    /// JSON `{"error": ...}` response carrying the caller's CORS headers.
    pub fn error_response(&self, origin: &RequestOrigin<'_>, debug_errors: bool) -> HttpResponse {
        origin
            .response(self.status_code())
            .json(serde_json::json!({ "error": self.client_message(debug_errors) }))
    }
}

pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
