//! Error handling for the web front-end.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

/// Failures that surface as an error page.
#[derive(Debug, Error)]
pub enum WebError {
    #[error("storage error: {0}")]
    Storage(#[from] drill_core::StorageError),

    #[error("page not found")]
    NotFound,
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = match &self {
            WebError::Storage(err) => {
                tracing::error!("storage failure: {err}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            WebError::NotFound => StatusCode::NOT_FOUND,
        };

        (status, Html(crate::views::error_page(&self.to_string()))).into_response()
    }
}

pub type Result<T> = std::result::Result<T, WebError>;
