//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod auth;
pub mod config;
pub mod internal;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, internal::InternalError},
};

/// Top-level application error type.
///
/// Most variants use `#[from]` for automatic conversion with `?`. Domain-specific
/// errors like `AuthError` handle their own response mapping, while generic variants
/// provide standard HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication error.
    ///
    /// Delegates to `AuthError::into_response()` for the 401 mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Unexpected internal condition, such as corrupt session data.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// SQLx database driver error, raised by the session store migration.
    #[error(transparent)]
    SqlxErr(#[from] sea_orm::SqlxError),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// Socket bind or serve failure.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message. Raised for query
    /// parameters that fail to parse or reference records that don't exist.
    #[error("{0}")]
    BadRequest(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` variant
/// - 401 Unauthorized - For `AuthErr`, delegated to `AuthError::into_response()`
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message so
/// implementation details never reach the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
