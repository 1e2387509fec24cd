//! Request-boundary error type.
//!
//! The API has a single failure kind. Whatever goes wrong while assembling a
//! response is logged with its detail and reported to the caller as a generic
//! 500 with no detail.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::warn;

use crate::generator::GeneratorError;
use crate::model::ErrorResponse;

/// Message returned to clients for every internal fault.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch profiles";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("internal fault: {0}")]
    InternalFault(#[source] anyhow::Error),
}

impl From<GeneratorError> for ApiError {
    fn from(err: GeneratorError) -> Self {
        ApiError::InternalFault(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InternalFault(source) => {
                warn!(error = %source, "Failed to assemble profiles response");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        error: FETCH_FAILED_MESSAGE.to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
