use crate::server::error::auth::AuthError;

/// Identity of whoever sent the current request.
///
/// Resolved once per request by `AuthGuard::caller` from the session the
/// identity provider maintains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Caller {
    /// No user in session, or the session user no longer exists.
    Anonymous,
    /// A logged in user.
    Authenticated {
        /// Database ID of the user.
        user_id: i32,
    },
}

impl Caller {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    /// Returns the caller's user ID or fails for anonymous callers.
    ///
    /// # Returns
    /// - `Ok(i32)` - ID of the authenticated user
    /// - `Err(AuthError::AuthenticationRequired)` - Caller is anonymous
    pub fn require_user_id(&self) -> Result<i32, AuthError> {
        match self {
            Self::Authenticated { user_id } => Ok(*user_id),
            Self::Anonymous => Err(AuthError::AuthenticationRequired),
        }
    }
}
