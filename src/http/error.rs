//! Handler fault mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::order::OrderError;

/// Error type for request handlers.
///
/// Anything that escapes a handler renders as a generic 500; the cause
/// goes to the log, not the client.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Order(#[from] OrderError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request handler failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}
