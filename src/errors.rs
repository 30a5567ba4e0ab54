use actix_http::StatusCode;
use actix_web::{http::header::ContentType, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

/// Failures talking to the hosted backend.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("backend answered {0}")]
    Status(reqwest::StatusCode),
    #[error("unexpected response body: {0}")]
    Decode(#[source] reqwest::Error),
}

impl ApiError {
    pub fn from_status(e: reqwest::Error) -> Self {
        match e.status() {
            Some(status) => ApiError::Status(status),
            None => ApiError::Transport(e),
        }
    }
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("request malformed")]
    BadRequest(String),
    #[error("internal error")]
    StateLockError,
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServiceError::StateLockError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        #[derive(Serialize)]
        struct ErrorResponse {
            success: bool,
            error: String,
        }

        let error = match self {
            ServiceError::BadRequest(reason) => format!("{}: {}", self, reason),
            _ => self.to_string(),
        };

        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(ErrorResponse {
                success: false,
                error,
            })
    }
}
