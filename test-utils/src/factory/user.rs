//! User factory for creating test user entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .username("alice")
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    username: String,
    date_joined: DateTime<Utc>,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - username: `"user_{id}"` where id is auto-incremented
    /// - date_joined: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            username: format!("user_{}", id),
            date_joined: Utc::now(),
        }
    }

    /// Sets the username.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Sets the join timestamp.
    pub fn date_joined(mut self, date_joined: DateTime<Utc>) -> Self {
        self.date_joined = date_joined;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            username: ActiveValue::Set(self.username),
            date_joined: ActiveValue::Set(self.date_joined),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}
