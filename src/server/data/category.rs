//! Category data repository for database operations.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::model::category::Category;

/// Repository providing read access to server categories.
pub struct CategoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryRepository<'a> {
    /// Creates a new CategoryRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all categories ordered by name.
    ///
    /// # Returns
    /// - `Ok(Vec<Category>)` - Every category, possibly empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Category>, DbErr> {
        let categories = entity::prelude::Category::find()
            .order_by_asc(entity::category::Column::Name)
            .all(self.db)
            .await?;

        Ok(categories.into_iter().map(Category::from_entity).collect())
    }
}
