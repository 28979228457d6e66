use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

use crate::repository::StoreError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not Found: {0}")]
    NotFound(String),
    #[error("Validation Failed: {0}")]
    Validation(String),
    #[error("Malformed Request: {0}")]
    MalformedRequest(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Unexpected Failure: {context}")]
    Unexpected {
        context: String,
        #[source]
        source: Option<StoreError>,
    },
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl AppError {
    pub fn unexpected(context: impl Into<String>, source: StoreError) -> Self {
        AppError::Unexpected { context: context.into(), source: Some(source) }
    }

    fn client_message(&self) -> String {
        match self {
            AppError::NotFound(msg)
            | AppError::Validation(msg)
            | AppError::MalformedRequest(msg)
            | AppError::Conflict(msg) => msg.clone(),
            AppError::Unexpected { .. } => "Internal server error".to_string(),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) | AppError::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Unexpected { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse { error: self.client_message() })
    }
}
