use crate::api::controllers::dto::category_dto::{
    CategoryResponse, CreateCategoryRequest, UpdateCategoryRequest,
};
use crate::data::models::product::CatalogStatus;
use crate::security::jwt::AccessClaims;
use crate::services::category_service::CategoryService;
use crate::services::errors::CategoryServiceError;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

/// Public storefront listing, active categories only.
pub async fn get_categories() -> impl IntoResponse {
    let service = CategoryService::new();

    match service.get_categories().await {
        Ok(categories) => {
            let response: Vec<CategoryResponse> =
                categories.into_iter().map(CategoryResponse::from).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            tracing::error!("Error fetching categories: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch categories",
            )
                .into_response()
        }
    }
}

pub async fn get_all_categories(claims: AccessClaims) -> impl IntoResponse {
    let service = CategoryService::new();

    match service.get_all_categories(claims.role()).await {
        Ok(categories) => {
            let response: Vec<CategoryResponse> =
                categories.into_iter().map(CategoryResponse::from).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => category_error_response(e),
    }
}

pub async fn create_category(
    claims: AccessClaims,
    Json(request): Json<CreateCategoryRequest>,
) -> impl IntoResponse {
    let service = CategoryService::new();

    match service.add_category(claims.role(), &request.name).await {
        Ok(()) => (StatusCode::CREATED, "Category created").into_response(),
        Err(e) => category_error_response(e),
    }
}

pub async fn update_category(
    claims: AccessClaims,
    Path(category_id): Path<i32>,
    Json(request): Json<UpdateCategoryRequest>,
) -> impl IntoResponse {
    let service = CategoryService::new();

    let status = match request.status.as_deref() {
        Some(s) => match s.parse::<CatalogStatus>() {
            Ok(parsed) => Some(parsed),
            Err(_) => return (StatusCode::BAD_REQUEST, "Unknown status").into_response(),
        },
        None => None,
    };

    match service
        .edit_category(claims.role(), category_id, request.name.as_deref(), status)
        .await
    {
        Ok(()) => (StatusCode::OK, "Category updated").into_response(),
        Err(e) => category_error_response(e),
    }
}

pub async fn delete_category(
    claims: AccessClaims,
    Path(category_id): Path<i32>,
) -> impl IntoResponse {
    let service = CategoryService::new();

    match service.delete_category(claims.role(), category_id).await {
        Ok(()) => (StatusCode::OK, "Category deleted").into_response(),
        Err(e) => category_error_response(e),
    }
}

fn category_error_response(error: CategoryServiceError) -> axum::response::Response {
    match error {
        CategoryServiceError::PermissionDenied => {
            (StatusCode::FORBIDDEN, "Permission denied").into_response()
        }
        CategoryServiceError::CategoryNotFound => {
            (StatusCode::NOT_FOUND, "Category not found").into_response()
        }
        CategoryServiceError::CategoryAlreadyExists => {
            (StatusCode::CONFLICT, "Category already exists").into_response()
        }
        e => {
            tracing::error!("Category operation failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Operation failed").into_response()
        }
    }
}
