use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

use crate::{models::dto::response::MessageResponse, services::quiz_validator::QuizRejection};

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Invalid token!")]
    InvalidToken,

    #[error("Cannot find UID in token!")]
    MissingSubject,

    #[error("Quiz not found!")]
    NotFound,

    #[error(transparent)]
    Validation(#[from] QuizRejection),

    #[error("{0}")]
    Store(String),

    #[error("{0}")]
    InvalidPayload(String),

    #[error("{0}")]
    Internal(String),
}

/// `{"status": "error", "message": ...}` body used for every 500.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub status: &'static str,
    pub message: String,
}

impl ResponseError for AppError {
    // Validation failures share the 500 of store failures; clients tell them
    // apart by message only.
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidToken | AppError::MissingSubject => StatusCode::FORBIDDEN,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Validation(_)
            | AppError::Store(_)
            | AppError::InvalidPayload(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut response = HttpResponse::build(self.status_code());
        match self {
            AppError::InvalidToken | AppError::MissingSubject | AppError::NotFound => {
                response.json(MessageResponse::new(self.to_string()))
            }
            _ => response.json(ErrorEnvelope {
                status: "error",
                message: self.to_string(),
            }),
        }
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::Store(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
