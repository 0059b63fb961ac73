use crate::api::config::Config;
use crate::data::models::user::{User, UserRole};
use crate::security::errors::AuthError;
use serde::{Deserialize, Serialize};

pub struct JwtService;

impl JwtService {
    pub fn new() -> Self {
        JwtService
    }

    pub fn generate_token(&self, user: &User) -> Result<String, AuthError> {
        let curr_time = chrono::Utc::now().timestamp() as usize;
        let config = Config::default();

        let claims = AccessClaims {
            sub: user.user_id,
            iat: curr_time,
            exp: curr_time + (config.jwt_expiration_minutes * 60) as usize,
            role: user.role().as_str().to_string(),
        };

        let token = jsonwebtoken::encode(
            &jsonwebtoken::Header::default(),
            &claims,
            &jsonwebtoken::EncodingKey::from_secret(config.jwt_secret.as_ref()),
        )
        .map_err(|_| AuthError::TokenCreationError)?;

        tracing::info!(user_id = user.user_id, "Access token generated");

        Ok(token)
    }

    pub fn decode_token<T: for<'de> Deserialize<'de>>(&self, token: &str) -> Result<T, AuthError> {
        let validation = jsonwebtoken::Validation::default();

        let token_data = jsonwebtoken::decode::<T>(
            token,
            &jsonwebtoken::DecodingKey::from_secret(Config::default().jwt_secret.as_ref()),
            &validation,
        )
        .map_err(|_| AuthError::InvalidToken)?;

        Ok(token_data.claims)
    }
}

impl Default for JwtService {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject (user ID)
    pub sub: i32,
    /// Issued at (as UTC timestamp)
    pub iat: usize,
    /// Expiration time (as UTC timestamp)
    pub exp: usize,
    /// Application role ("Admin" or "User")
    pub role: String,
}

impl AccessClaims {
    pub fn user_id(&self) -> i32 {
        self.sub
    }

    pub fn role(&self) -> UserRole {
        self.role.parse().unwrap_or(UserRole::User)
    }

    pub fn is_admin(&self) -> bool {
        self.role().is_admin()
    }
}
