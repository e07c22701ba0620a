use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use summit::data::ErrorResponse;
use summit::errors::{StoreError, ValidationError};
use summit::log;
use summit::serde_json::{self, Value};

/// Errors a handler can answer with.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Rejected {
            status: StatusCode::BAD_REQUEST,
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            Self::Validation(err) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                serde_json::to_value(&err.errors).unwrap_or(Value::Null),
            ),
            Self::Rejected { status, message } => (*status, Value::String(message.clone())),
            Self::Store(err) => {
                log::error!("Store operation failed: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Value::String(err.to_string()),
                )
            }
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}

/// Fallback for unknown routes
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            detail: Value::String("Not Found".to_string()),
        }),
    )
}
