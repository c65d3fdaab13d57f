use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The request asked for caller-scoped data without an authenticated session.
    ///
    /// Raised when an anonymous caller filters servers by membership (`by_user`)
    /// or by ID (`by_serverid`). Results in a 401 Unauthorized response.
    #[error("Authentication credentials were not provided.")]
    AuthenticationRequired,
}

/// Converts authentication errors into HTTP responses.
///
/// # Returns
/// - 401 Unauthorized - For `AuthenticationRequired`
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthenticationRequired => {
                tracing::debug!("Rejected anonymous caller-scoped request");
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: self.to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
