use crate::api::controllers::dto::order_dto::{
    CheckoutRequest, CreateOrderRequest, OrderCreatedResponse, OrderDetailResponse,
    OrderQueryParams, OrderResponse, UpdateOrderStatusRequest,
};
use crate::security::jwt::AccessClaims;
use crate::services::errors::OrderServiceError;
use crate::services::order_service::{CustomerInfo, OrderService, OrderStatus};
use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

/// Turns the caller's cart into a Pending order.
pub async fn checkout(
    claims: AccessClaims,
    Json(request): Json<CheckoutRequest>,
) -> impl IntoResponse {
    let service = OrderService::new();
    let customer = CustomerInfo::from(&request);

    match service.checkout(claims.user_id(), &customer).await {
        Ok((order_id, total_amount)) => {
            let response = OrderCreatedResponse {
                order_id,
                total_amount,
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => order_error_response(e),
    }
}

/// Direct order creation with an explicit item list.
pub async fn create_order(
    claims: AccessClaims,
    Json(request): Json<CreateOrderRequest>,
) -> impl IntoResponse {
    let service = OrderService::new();
    let customer = CustomerInfo::from(&request);
    let items: Vec<(i32, i32)> = request.products.iter().map(<(i32, i32)>::from).collect();

    match service
        .create_order(Some(claims.user_id()), &customer, items)
        .await
    {
        Ok((order_id, total_amount)) => {
            let response = OrderCreatedResponse {
                order_id,
                total_amount,
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => order_error_response(e),
    }
}

/// Full order book, optionally filtered by status. Admin only.
pub async fn get_all_orders(
    claims: AccessClaims,
    Query(params): Query<OrderQueryParams>,
) -> impl IntoResponse {
    let service = OrderService::new();

    let result = match params.status.as_deref() {
        Some(raw) => match raw.parse::<OrderStatus>() {
            Ok(status) => service.get_orders_by_status(status, claims.role()).await,
            Err(_) => return (StatusCode::BAD_REQUEST, "Unknown status").into_response(),
        },
        None => service.get_all_orders(claims.role()).await,
    };

    match result {
        Ok(orders) => {
            let response: Vec<OrderResponse> = orders
                .unwrap_or_default()
                .into_iter()
                .map(OrderResponse::from)
                .collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => order_error_response(e),
    }
}

/// The caller's own order history.
pub async fn get_my_orders(claims: AccessClaims) -> impl IntoResponse {
    let service = OrderService::new();

    match service
        .get_user_orders(claims.user_id(), claims.user_id(), claims.role())
        .await
    {
        Ok(orders) => {
            let response: Vec<OrderResponse> = orders
                .unwrap_or_default()
                .into_iter()
                .map(OrderResponse::from)
                .collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => order_error_response(e),
    }
}

pub async fn get_user_orders(claims: AccessClaims, Path(user_id): Path<i32>) -> impl IntoResponse {
    let service = OrderService::new();

    match service
        .get_user_orders(user_id, claims.user_id(), claims.role())
        .await
    {
        Ok(orders) => {
            let response: Vec<OrderResponse> = orders
                .unwrap_or_default()
                .into_iter()
                .map(OrderResponse::from)
                .collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => order_error_response(e),
    }
}

pub async fn get_order_by_id(claims: AccessClaims, Path(order_id): Path<i32>) -> impl IntoResponse {
    let service = OrderService::new();

    match service
        .get_order_by_id(order_id, claims.user_id(), claims.role())
        .await
    {
        Ok(Some(detail)) => {
            (StatusCode::OK, Json(OrderDetailResponse::from(detail))).into_response()
        }
        Ok(None) => (StatusCode::NOT_FOUND, "Order not found").into_response(),
        Err(e) => order_error_response(e),
    }
}

pub async fn update_order_status(
    claims: AccessClaims,
    Path(order_id): Path<i32>,
    Json(request): Json<UpdateOrderStatusRequest>,
) -> impl IntoResponse {
    let service = OrderService::new();

    let status = match request.status.parse::<OrderStatus>() {
        Ok(status) => status,
        Err(_) => return (StatusCode::BAD_REQUEST, "Unknown status").into_response(),
    };

    match service.update_status(order_id, status, claims.role()).await {
        Ok(()) => (StatusCode::OK, "Order status updated").into_response(),
        Err(e) => order_error_response(e),
    }
}

pub async fn cancel_order(claims: AccessClaims, Path(order_id): Path<i32>) -> impl IntoResponse {
    let service = OrderService::new();

    match service
        .cancel_order(order_id, claims.user_id(), claims.role())
        .await
    {
        Ok(()) => (StatusCode::OK, "Order cancelled").into_response(),
        Err(e) => order_error_response(e),
    }
}

fn order_error_response(error: OrderServiceError) -> axum::response::Response {
    match error {
        OrderServiceError::PermissionDenied => {
            (StatusCode::FORBIDDEN, "Permission denied").into_response()
        }
        OrderServiceError::OrderNotFound => {
            (StatusCode::NOT_FOUND, "Order not found").into_response()
        }
        OrderServiceError::EmptyCart => (StatusCode::BAD_REQUEST, "Cart is empty").into_response(),
        OrderServiceError::ProductNotFound => {
            (StatusCode::BAD_REQUEST, "Product not found").into_response()
        }
        OrderServiceError::ProductUnavailable => {
            (StatusCode::CONFLICT, "Product is not available").into_response()
        }
        OrderServiceError::InvalidQuantity => {
            (StatusCode::BAD_REQUEST, "Quantity must be at least 1").into_response()
        }
        OrderServiceError::InvalidStatusTransition => {
            (StatusCode::CONFLICT, "Invalid status transition").into_response()
        }
        e => {
            tracing::error!("Order operation failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Operation failed").into_response()
        }
    }
}
