use crate::data::models::user::User;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[derive(Deserialize, Debug, Clone)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[skip_serializing_none]
#[derive(Serialize, Debug, Clone)]
pub struct UserResponse {
    pub user_id: i32,
    pub name: String,
    pub email: String,
    pub role: String,
    pub created_at: Option<String>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.user_id,
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
            created_at: user.created_at.map(|dt| dt.format("%d/%m/%Y").to_string()),
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserResponse,
}
