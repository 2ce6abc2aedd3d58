// src/ports/error.rs

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::domain::DomainError;

/// The endpoint a failure happened in. Picks the generic 500 message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Fetch,
    Add,
    Edit,
    Delete,
}

impl Operation {
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::Fetch => "Error fetching items",
            Operation::Add => "Error adding flashcard",
            Operation::Edit => "Error editing flashcard",
            Operation::Delete => "Error deleting flashcard",
        }
    }
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: "Flashcard not found".to_string(),
        }
    }

    pub fn invalid_body() -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: "Invalid request body".to_string(),
        }
    }

    /// Log the failure with full detail and keep only what the caller may see
    pub fn from_domain(operation: Operation, err: DomainError) -> Self {
        match err {
            DomainError::NotFound(id) => {
                debug!(?operation, flashcard_id = id, "Flashcard not found");
                Self::not_found()
            }
            DomainError::Validation(message) => {
                debug!(?operation, %message, "Rejected request");
                Self {
                    status: StatusCode::BAD_REQUEST,
                    message,
                }
            }
            DomainError::Store(detail) => {
                error!(?operation, error = %detail, "Store operation failed");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: operation.failure_message().to_string(),
                }
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            error: self.message,
        });
        (self.status, body).into_response()
    }
}
