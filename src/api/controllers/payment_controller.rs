use crate::api::controllers::dto::payment_dto::{
    ConfirmPaymentRequest, CreateIntentRequest, CreateIntentResponse,
};
use crate::security::jwt::AccessClaims;
use crate::services::errors::{OrderServiceError, PaymentServiceError};
use crate::services::order_service::OrderService;
use crate::services::payment_gateway::StripeGateway;
use crate::services::payment_service::PaymentService;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

/// Verifies the caller may pay for the order before talking to the gateway.
async fn authorize_order_access(
    claims: &AccessClaims,
    order_id: i32,
) -> Result<(), axum::response::Response> {
    let orders = OrderService::new();

    match orders
        .get_order_by_id(order_id, claims.user_id(), claims.role())
        .await
    {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err((StatusCode::NOT_FOUND, "Order not found").into_response()),
        Err(OrderServiceError::PermissionDenied) => {
            Err((StatusCode::FORBIDDEN, "Permission denied").into_response())
        }
        Err(e) => {
            tracing::error!("Error fetching order: {}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch order").into_response())
        }
    }
}

pub async fn create_intent(
    claims: AccessClaims,
    Json(request): Json<CreateIntentRequest>,
) -> impl IntoResponse {
    if let Err(response) = authorize_order_access(&claims, request.order_id).await {
        return response;
    }

    let service = PaymentService::new(StripeGateway::from_config());

    match service.create_intent(request.order_id).await {
        Ok(handle) => {
            let response = CreateIntentResponse {
                intent_id: handle.intent_id,
                client_secret: handle.client_secret,
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => payment_error_response(e),
    }
}

pub async fn confirm_payment(
    claims: AccessClaims,
    Json(request): Json<ConfirmPaymentRequest>,
) -> impl IntoResponse {
    if let Err(response) = authorize_order_access(&claims, request.order_id).await {
        return response;
    }

    let service = PaymentService::new(StripeGateway::from_config());

    match service
        .confirm_payment(request.order_id, &request.intent_id)
        .await
    {
        Ok(()) => (StatusCode::OK, "Payment confirmed").into_response(),
        Err(e) => payment_error_response(e),
    }
}

fn payment_error_response(error: PaymentServiceError) -> axum::response::Response {
    match error {
        PaymentServiceError::OrderNotFound => {
            (StatusCode::NOT_FOUND, "Order not found").into_response()
        }
        PaymentServiceError::OrderNotPending => {
            (StatusCode::CONFLICT, "Order is not awaiting payment").into_response()
        }
        PaymentServiceError::AmountOverflow => {
            (StatusCode::UNPROCESSABLE_ENTITY, "Order total cannot be charged").into_response()
        }
        PaymentServiceError::GatewayUnavailable => {
            (StatusCode::BAD_GATEWAY, "Payment gateway unavailable").into_response()
        }
        PaymentServiceError::PaymentFailed => {
            (StatusCode::PAYMENT_REQUIRED, "Payment failed").into_response()
        }
        PaymentServiceError::PaymentIncomplete => {
            (StatusCode::CONFLICT, "Payment has not completed yet").into_response()
        }
        PaymentServiceError::DatabaseError => {
            (StatusCode::INTERNAL_SERVER_ERROR, "Database error").into_response()
        }
    }
}
