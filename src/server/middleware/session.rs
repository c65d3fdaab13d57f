//! Type-safe session access.
//!
//! The identity provider owns login and logout and records the authenticated user
//! in the shared session store. This module wraps the raw `Session` so the key and
//! encoding of that record live in one place.

use tower_sessions::Session;

use crate::server::{error::AppError, util::parse::parse_i32_from_string};

const SESSION_AUTH_USER_ID: &str = "auth:user";

/// Authentication session access.
///
/// Reads and writes the authenticated user's ID, stored as a string.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession wrapper.
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the user's ID in the session, as the identity provider does on login.
    ///
    /// # Arguments
    /// - `user_id` - Database ID of the authenticated user
    ///
    /// # Returns
    /// - `Ok(())` - User ID successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    #[cfg(test)]
    pub async fn set_user_id(&self, user_id: i32) -> Result<(), AppError> {
        self.session
            .insert(SESSION_AUTH_USER_ID, user_id.to_string())
            .await?;
        Ok(())
    }

    /// Retrieves the user's ID from the session.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - A user is logged in
    /// - `Ok(None)` - No user in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    /// - `Err(AppError::InternalErr(_))` - Stored value is not an integer
    pub async fn get_user_id(&self) -> Result<Option<i32>, AppError> {
        let Some(user_id_str) = self.session.get::<String>(SESSION_AUTH_USER_ID).await? else {
            return Ok(None);
        };

        let user_id = parse_i32_from_string(user_id_str)?;

        Ok(Some(user_id))
    }

    /// Stores a raw value under the user key, bypassing the integer encoding.
    #[cfg(test)]
    pub async fn set_raw_user_id(&self, value: &str) -> Result<(), AppError> {
        self.session
            .insert(SESSION_AUTH_USER_ID, value.to_string())
            .await?;
        Ok(())
    }
}
