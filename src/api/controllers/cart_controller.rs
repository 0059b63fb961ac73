use crate::api::controllers::dto::cart_dto::{
    AddCartItemRequest, CartLineResponse, CartResponse, UpdateCartItemRequest,
};
use crate::security::jwt::AccessClaims;
use crate::services::cart_service::{cart_total, CartService};
use crate::services::errors::CartServiceError;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

pub async fn get_cart(claims: AccessClaims) -> impl IntoResponse {
    let service = CartService::new();

    match service.get_cart(claims.user_id()).await {
        Ok(lines) => {
            let total = cart_total(&lines);
            let response = CartResponse {
                items: lines.into_iter().map(CartLineResponse::from).collect(),
                total,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            tracing::error!("Error fetching cart: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch cart").into_response()
        }
    }
}

pub async fn add_cart_item(
    claims: AccessClaims,
    Json(request): Json<AddCartItemRequest>,
) -> impl IntoResponse {
    let service = CartService::new();

    match service
        .add_item(claims.user_id(), request.product_id, request.quantity)
        .await
    {
        Ok(()) => (StatusCode::CREATED, "Item added to cart").into_response(),
        Err(e) => cart_error_response(e),
    }
}

pub async fn update_cart_item(
    claims: AccessClaims,
    Path(cart_item_id): Path<i32>,
    Json(request): Json<UpdateCartItemRequest>,
) -> impl IntoResponse {
    let service = CartService::new();

    match service
        .update_quantity(claims.user_id(), cart_item_id, request.quantity)
        .await
    {
        Ok(()) => (StatusCode::OK, "Cart item updated").into_response(),
        Err(e) => cart_error_response(e),
    }
}

pub async fn remove_cart_item(
    claims: AccessClaims,
    Path(cart_item_id): Path<i32>,
) -> impl IntoResponse {
    let service = CartService::new();

    match service.remove_item(claims.user_id(), cart_item_id).await {
        Ok(()) => (StatusCode::OK, "Cart item removed").into_response(),
        Err(e) => cart_error_response(e),
    }
}

pub async fn clear_cart(claims: AccessClaims) -> impl IntoResponse {
    let service = CartService::new();

    match service.clear_cart(claims.user_id()).await {
        Ok(()) => (StatusCode::OK, "Cart cleared").into_response(),
        Err(e) => cart_error_response(e),
    }
}

fn cart_error_response(error: CartServiceError) -> axum::response::Response {
    match error {
        CartServiceError::InvalidQuantity => {
            (StatusCode::BAD_REQUEST, "Quantity must be at least 1").into_response()
        }
        CartServiceError::ProductNotFound => {
            (StatusCode::NOT_FOUND, "Product not found").into_response()
        }
        CartServiceError::ProductUnavailable => {
            (StatusCode::CONFLICT, "Product is not available").into_response()
        }
        CartServiceError::ItemNotFound => {
            (StatusCode::NOT_FOUND, "Cart item not found").into_response()
        }
        CartServiceError::PermissionDenied => {
            (StatusCode::FORBIDDEN, "Permission denied").into_response()
        }
        CartServiceError::DatabaseError => {
            (StatusCode::INTERNAL_SERVER_ERROR, "Database error").into_response()
        }
    }
}
