use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{error, warn};

use crate::api::ErrorResponse;
use crate::completion::CompletionError;

/// Failures surfaced at the HTTP boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{}", .0.body_text())]
    BadRequest(#[from] JsonRejection),
    #[error(transparent)]
    Upstream(#[from] CompletionError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(rejection) => rejection.status(),
            Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let detail = self.to_string();
        if status.is_server_error() {
            error!(status = status.as_u16(), %detail, "request failed");
        } else {
            warn!(status = status.as_u16(), %detail, "request rejected");
        }
        (status, Json(ErrorResponse { detail })).into_response()
    }
}
