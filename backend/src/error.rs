//! HTTP-facing error type.
//!
//! Every handler funnels its failures into `ApiError`, which picks the status
//! code and renders `{ "error": "<message>" }`.

use crate::eln::ElnError;
use crate::schema::SchemaError;
use actix_web::error::BlockingError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Invalid username or password")]
    Unauthorized,

    #[error("Table not found: {0}")]
    TableNotFound(String),

    #[error("{0}")]
    Schema(#[from] SchemaError),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("ELN request failed: {0}")]
    Eln(#[from] ElnError),

    #[error("Blocking task failed: {0}")]
    Blocking(#[from] BlockingError),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::Schema(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::TableNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Eln(_) => StatusCode::BAD_GATEWAY,
            ApiError::Database(_)
            | ApiError::Io(_)
            | ApiError::Serialization(_)
            | ApiError::Blocking(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("{}", self);
        }
        HttpResponse::build(status).json(serde_json::json!({ "error": self.to_string() }))
    }
}
