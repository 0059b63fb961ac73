use crate::data::models::category::Category;
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
}

#[derive(Deserialize)]
pub struct UpdateCategoryRequest {
    pub name: Option<String>,
    pub status: Option<String>,
}

#[derive(Serialize)]
pub struct CategoryResponse {
    pub category_id: i32,
    pub name: String,
    pub status: String,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            category_id: category.category_id,
            name: category.name,
            status: category.status,
        }
    }
}
