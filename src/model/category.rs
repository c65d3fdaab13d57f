use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
pub struct CategoryDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}
