//! Category factory for creating test category entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test categories with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::category::CategoryFactory;
///
/// let gaming = CategoryFactory::new(&db).name("gaming").build().await?;
/// ```
pub struct CategoryFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: Option<String>,
}

impl<'a> CategoryFactory<'a> {
    /// Creates a new CategoryFactory with default values.
    ///
    /// Defaults:
    /// - name: `"category_{id}"` where id is auto-incremented
    /// - description: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("category_{}", id),
            description: None,
        }
    }

    /// Sets the category name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the category description.
    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Builds and inserts the category entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::category::Model)` - Created category entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::category::Model, DbErr> {
        entity::category::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a category with default values.
pub async fn create_category(db: &DatabaseConnection) -> Result<entity::category::Model, DbErr> {
    CategoryFactory::new(db).build().await
}
