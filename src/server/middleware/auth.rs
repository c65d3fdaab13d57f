use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository, error::AppError, middleware::session::AuthSession,
    model::caller::Caller,
};

/// Resolves who is calling from the session and the user table.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Returns the caller of the current request.
    ///
    /// Never fails for anonymous requests. A session pointing at a user that has
    /// since been deleted is treated as anonymous.
    ///
    /// # Returns
    /// - `Ok(Caller::Authenticated)` - Session user exists in the database
    /// - `Ok(Caller::Anonymous)` - No session user, or the user no longer exists
    /// - `Err(AppError)` - Session store, parse, or database failure
    pub async fn caller(&self) -> Result<Caller, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Ok(Caller::Anonymous);
        };

        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            tracing::debug!("Session user {} not found, treating caller as anonymous", user_id);
            return Ok(Caller::Anonymous);
        };

        tracing::debug!("Resolved caller {} ({})", user.username, user.id);

        Ok(Caller::Authenticated { user_id: user.id })
    }
}
