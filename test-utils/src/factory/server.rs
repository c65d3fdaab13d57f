//! Server factory for creating test server entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test servers with customizable fields.
///
/// The owner and category must already exist; create them with the user and
/// category factories first.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::server::ServerFactory;
///
/// let server = ServerFactory::new(&db, owner.id, gaming.id)
///     .name("Speedrunners")
///     .build()
///     .await?;
/// ```
pub struct ServerFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    owner_id: i32,
    category_id: i32,
    description: Option<String>,
}

impl<'a> ServerFactory<'a> {
    /// Creates a new ServerFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Server {id}"` where id is auto-incremented
    /// - description: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `owner_id` - ID of the owning user
    /// - `category_id` - ID of the category the server belongs to
    pub fn new(db: &'a DatabaseConnection, owner_id: i32, category_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Server {}", id),
            owner_id,
            category_id,
            description: None,
        }
    }

    /// Sets the server name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the server description.
    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Builds and inserts the server entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::server::Model)` - Created server entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::server::Model, DbErr> {
        entity::server::ActiveModel {
            name: ActiveValue::Set(self.name),
            owner_id: ActiveValue::Set(self.owner_id),
            category_id: ActiveValue::Set(self.category_id),
            description: ActiveValue::Set(self.description),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a server with default values for the given owner and category.
pub async fn create_server(
    db: &DatabaseConnection,
    owner_id: i32,
    category_id: i32,
) -> Result<entity::server::Model, DbErr> {
    ServerFactory::new(db, owner_id, category_id).build().await
}
