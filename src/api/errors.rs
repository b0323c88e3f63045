use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::errors::CoachError;

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub field: String,
    pub message: String,
}

#[derive(Debug)]
pub enum AppError {
    InvalidArgument { field: String, message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::InvalidArgument { field, message } => (
                StatusCode::BAD_REQUEST,
                ApiError {
                    error: ErrorBody {
                        code: "INVALID_ARGUMENT",
                        field,
                        message,
                    },
                },
            ),
        };

        (status, Json(error)).into_response()
    }
}

impl From<CoachError> for AppError {
    fn from(err: CoachError) -> Self {
        AppError::InvalidArgument {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidArgument {
            field: "body".to_string(),
            message: rejection.body_text(),
        }
    }
}
