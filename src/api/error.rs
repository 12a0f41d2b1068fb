use crate::domain::model::ParseNumberError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Request errors reported to the caller with a JSON body.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Missing 'number' parameter")]
    MissingParameter,

    #[error("Invalid input")]
    InvalidInput { raw: String },

    #[error("Internal server error")]
    Internal,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    number: Option<String>,
    error: bool,
    message: String,
}

impl From<ParseNumberError> for ApiError {
    fn from(e: ParseNumberError) -> Self {
        ApiError::InvalidInput { raw: e.raw }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        let (status, number) = match self {
            ApiError::MissingParameter => (StatusCode::BAD_REQUEST, None),
            ApiError::InvalidInput { raw } => (StatusCode::BAD_REQUEST, Some(raw)),
            ApiError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, None),
        };

        let body = ErrorBody {
            number,
            error: true,
            message,
        };
        (status, Json(body)).into_response()
    }
}
