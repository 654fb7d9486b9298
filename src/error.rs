use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use sea_orm::DbErr;
use thiserror::Error as ThisError;

/// Closed failure taxonomy for request handling.
///
/// Form handlers log the variant and collapse it into a single generic
/// flash for the end user; read-only pages surface it as an error page.
#[derive(Debug, ThisError)]
pub enum AppError {
    /// Form input that does not parse into the record's field types.
    #[error("validation failure: {0}")]
    Validation(String),

    /// A unique key (username, email, course code) already holds this value.
    #[error("uniqueness conflict: {0}")]
    Conflict(String),

    /// The store rejected the statement for any other reason.
    #[error("storage unavailable: {0}")]
    Unavailable(#[from] DbErr),
}

impl AppError {
    /// Classify a store error. Constraint violations carry the offending
    /// key in the driver message on both SQLite and Postgres.
    pub fn from_db(err: DbErr) -> Self {
        let message = err.to_string().to_lowercase();
        if message.contains("unique") || message.contains("constraint") {
            AppError::Conflict(err.to_string())
        } else {
            AppError::Unavailable(err)
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(_) => (
                StatusCode::BAD_REQUEST,
                "The submitted form could not be processed.",
            ),
            AppError::Conflict(_) => (
                StatusCode::CONFLICT,
                "A record with these details already exists.",
            ),
            AppError::Unavailable(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "The record store is currently unavailable.",
            ),
        };

        let body = format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\"><title>{status}</title></head>\n<body><h1>{status}</h1><p>{message}</p><p><a href=\"/\">Back to start</a></p></body>\n</html>\n",
            status = status.as_u16(),
        );
        (status, Html(body)).into_response()
    }
}
