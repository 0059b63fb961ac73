use crate::api::controllers::dto::user_dto::{
    LoginRequest, LoginResponse, RegisterRequest, UserResponse,
};
use crate::data::models::user::{NewUser, UserRole};
use crate::data::repos::implementors::user_repo::UserRepo;
use crate::data::repos::traits::repository::Repository;
use crate::security::auth::AuthService;
use crate::security::jwt::JwtService;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

pub async fn register_user(Json(request): Json<RegisterRequest>) -> impl IntoResponse {
    let auth = AuthService::new();
    let repo = UserRepo::new();

    if request.name.trim().is_empty() || !request.email.contains('@') {
        return (StatusCode::BAD_REQUEST, "Name and a valid email are required").into_response();
    }

    if request.password.len() < 8 {
        return (
            StatusCode::BAD_REQUEST,
            "Password must be at least 8 characters",
        )
            .into_response();
    }

    match repo.get_by_email(&request.email).await {
        Ok(Some(_)) => {
            return (StatusCode::CONFLICT, "Email is already registered").into_response()
        }
        Ok(None) => {}
        Err(e) => {
            tracing::error!("Error fetching user: {}", e);
            return (StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch user").into_response();
        }
    }

    let hashed_password = match auth.hash_password(&request.password).await {
        Ok(h) => h,
        Err(e) => {
            tracing::error!("Error hashing password: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to process password",
            )
                .into_response();
        }
    };

    let new_user = NewUser {
        name: &request.name,
        email: &request.email,
        password_hash: &hashed_password,
        role: UserRole::User.as_str(),
    };

    match repo.add(new_user).await {
        Ok(_) => {
            tracing::info!(email = %request.email, "User registered");
            (StatusCode::CREATED, "User created").into_response()
        }
        Err(e) => {
            tracing::error!("Error creating user: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to create user").into_response()
        }
    }
}

pub async fn login(Json(request): Json<LoginRequest>) -> impl IntoResponse {
    let auth = AuthService::new();
    let repo = UserRepo::new();

    let user = match repo.get_by_email(&request.email).await {
        Ok(Some(user)) => user,
        Ok(None) => return (StatusCode::UNAUTHORIZED, "Invalid credentials").into_response(),
        Err(e) => {
            tracing::error!("Error fetching user: {}", e);
            return (StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch user").into_response();
        }
    };

    match auth
        .verify_password(&request.password, &user.password_hash)
        .await
    {
        Ok(true) => {}
        Ok(false) => return (StatusCode::UNAUTHORIZED, "Invalid credentials").into_response(),
        Err(e) => {
            tracing::error!("Error verifying password: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to verify password",
            )
                .into_response();
        }
    }

    let tokenizer = JwtService::new();
    match tokenizer.generate_token(&user) {
        Ok(token) => {
            let response = LoginResponse {
                token,
                user: UserResponse::from(&user),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            tracing::error!("Error generating token: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to generate token").into_response()
        }
    }
}
