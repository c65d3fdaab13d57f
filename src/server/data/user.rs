//! User data repository for database operations.
//!
//! Users are created and maintained by the identity provider; this service only
//! looks them up to resolve the caller of a request.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

use crate::server::model::user::User;

/// Repository providing read access to users.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a user by their ID.
    ///
    /// # Arguments
    /// - `id` - Database ID of the user
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with this ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let user = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(user.map(User::from_entity))
    }
}
