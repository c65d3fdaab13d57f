use chrono::{DateTime, Utc};

/// Registered user of the application.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub date_joined: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            date_joined: entity.date_joined,
        }
    }
}
