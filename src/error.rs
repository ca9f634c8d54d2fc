use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Internal server error")]
    InternalError(String),
}

impl From<chefmenu_shared::Error> for AppError {
    fn from(err: chefmenu_shared::Error) -> Self {
        use chefmenu_shared::Error;

        match err {
            Error::Validate(_)
            | Error::InvalidPrice(_)
            | Error::InvalidCourse(_)
            | Error::DuplicateId(_) => AppError::ValidationError(err.to_string()),
            // Requests carry their own items, nothing is looked up by id
            Error::NotFound(_) | Error::Server(_) => AppError::InternalError(err.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, message) = match self {
            AppError::ValidationError(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            AppError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred. Please try again later.".to_string(),
                )
            }
        };

        (status_code, Json(json!({ "error": message }))).into_response()
    }
}
