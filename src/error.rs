use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Forbidden (IP)")]
    Forbidden { ip: String },

    #[error("Unauthorized (token)")]
    Unauthorized,

    #[error("Method not allowed")]
    MethodNotAllowed,

    // Public intake never leaks the store error; the real cause is logged
    // where this is raised.
    #[error("Could not submit right now. Please try again.")]
    SubmitFailed,

    #[error("{0}")]
    Db(#[from] sea_orm::DbErr),

    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Forbidden { .. } => StatusCode::FORBIDDEN,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::SubmitFailed | AppError::Db(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        // 403 carries the resolved caller IP so an operator locked out by the
        // allowlist can see what the proxy chain resolved them to.
        let body = match &self {
            AppError::Forbidden { ip } => {
                serde_json::json!({ "error": self.to_string(), "ip": ip })
            }
            _ => serde_json::json!({ "error": self.to_string() }),
        };

        (status, axum::Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
