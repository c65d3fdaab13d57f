use crate::model::category::CategoryDto;

/// Named grouping that servers belong to.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

impl Category {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::category::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
        }
    }

    /// Converts the domain model to a DTO for API responses.
    pub fn into_dto(self) -> CategoryDto {
        CategoryDto {
            id: self.id,
            name: self.name,
            description: self.description,
        }
    }
}
