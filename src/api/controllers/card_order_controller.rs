use crate::api::controllers::dto::card_order_dto::{
    CardOrderCreatedResponse, CardOrderQueryParams, CardOrderResponse,
    UpdateCardOrderStatusRequest,
};
use crate::security::jwt::AccessClaims;
use crate::services::card_order_service::{CardOrderService, CardOrderStatus};
use crate::services::errors::CardOrderServiceError;
use crate::utils::uploads;
use axum::extract::{Multipart, Path, Query};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

/// Creates a custom card order from a multipart form. Expects text fields
/// `card_type_id` and `quantity`, optional `customer_notes`, and a `design`
/// file part.
pub async fn create_card_order(claims: AccessClaims, mut multipart: Multipart) -> impl IntoResponse {
    let mut card_type_id: Option<i32> = None;
    let mut quantity: Option<i32> = None;
    let mut customer_notes: Option<String> = None;
    let mut design: Option<(String, axum::body::Bytes)> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                tracing::error!("Error reading multipart field: {}", e);
                return (StatusCode::BAD_REQUEST, "Malformed form data").into_response();
            }
        };

        match field.name().unwrap_or_default() {
            "card_type_id" => match field.text().await {
                Ok(text) => card_type_id = text.parse().ok(),
                Err(_) => return (StatusCode::BAD_REQUEST, "Malformed form data").into_response(),
            },
            "quantity" => match field.text().await {
                Ok(text) => quantity = text.parse().ok(),
                Err(_) => return (StatusCode::BAD_REQUEST, "Malformed form data").into_response(),
            },
            "customer_notes" => match field.text().await {
                Ok(text) => customer_notes = Some(text),
                Err(_) => return (StatusCode::BAD_REQUEST, "Malformed form data").into_response(),
            },
            "design" => {
                let file_name = field.file_name().unwrap_or("design.bin").to_string();
                let bytes = match field.bytes().await {
                    Ok(bytes) => bytes,
                    Err(_) => {
                        return (StatusCode::BAD_REQUEST, "Malformed form data").into_response()
                    }
                };

                if bytes.is_empty() {
                    return (StatusCode::BAD_REQUEST, "Design file is empty").into_response();
                }

                design = Some((file_name, bytes));
            }
            _ => {}
        }
    }

    let (card_type_id, quantity) = match (card_type_id, quantity) {
        (Some(c), Some(q)) => (c, q),
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                "card_type_id and quantity are required",
            )
                .into_response()
        }
    };

    let (file_name, bytes) = match design {
        Some(design) => design,
        None => return (StatusCode::BAD_REQUEST, "A design file is required").into_response(),
    };

    // The file is written only once the form is complete; a rejected order
    // must not leave an orphaned upload behind.
    let design_uri = match uploads::save_upload(&file_name, &bytes).await {
        Ok(uri) => uri,
        Err(e) => {
            tracing::error!("Error storing design upload: {}", e);
            return (StatusCode::INTERNAL_SERVER_ERROR, "Failed to store design").into_response();
        }
    };

    let service = CardOrderService::new();

    match service
        .create_card_order(
            claims.user_id(),
            card_type_id,
            quantity,
            &design_uri,
            customer_notes.as_deref(),
        )
        .await
    {
        Ok((card_order_id, total_price)) => {
            let response = CardOrderCreatedResponse {
                card_order_id,
                total_price,
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => {
            if let Err(io_err) = uploads::remove_upload(&design_uri).await {
                tracing::warn!("Failed to remove stored design {}: {}", design_uri, io_err);
            }
            card_order_error_response(e)
        }
    }
}

/// The caller's own card orders.
pub async fn get_my_card_orders(claims: AccessClaims) -> impl IntoResponse {
    let service = CardOrderService::new();

    let orders = match service.get_user_orders(claims.user_id()).await {
        Ok(orders) => orders.unwrap_or_default(),
        Err(e) => return card_order_error_response(e),
    };

    match service.with_card_types(orders).await {
        Ok(detailed) => {
            let response: Vec<CardOrderResponse> = detailed
                .into_iter()
                .map(CardOrderResponse::from)
                .collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => card_order_error_response(e),
    }
}

/// All card orders, optionally filtered by status. Admin only.
pub async fn get_all_card_orders(
    claims: AccessClaims,
    Query(params): Query<CardOrderQueryParams>,
) -> impl IntoResponse {
    let service = CardOrderService::new();

    let result = match params.status.as_deref() {
        Some(raw) => match raw.parse::<CardOrderStatus>() {
            Ok(status) => service.get_orders_by_status(status, claims.role()).await,
            Err(_) => return (StatusCode::BAD_REQUEST, "Unknown status").into_response(),
        },
        None => service.get_all_orders(claims.role()).await,
    };

    let orders = match result {
        Ok(orders) => orders.unwrap_or_default(),
        Err(e) => return card_order_error_response(e),
    };

    match service.with_card_types(orders).await {
        Ok(detailed) => {
            let response: Vec<CardOrderResponse> = detailed
                .into_iter()
                .map(CardOrderResponse::from)
                .collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => card_order_error_response(e),
    }
}

pub async fn update_card_order_status(
    claims: AccessClaims,
    Path(card_order_id): Path<i32>,
    Json(request): Json<UpdateCardOrderStatusRequest>,
) -> impl IntoResponse {
    let service = CardOrderService::new();

    let status = match request.status.parse::<CardOrderStatus>() {
        Ok(status) => status,
        Err(_) => return (StatusCode::BAD_REQUEST, "Unknown status").into_response(),
    };

    match service
        .update_status(card_order_id, status, claims.role())
        .await
    {
        Ok(()) => (StatusCode::OK, "Card order status updated").into_response(),
        Err(e) => card_order_error_response(e),
    }
}

pub async fn cancel_card_order(
    claims: AccessClaims,
    Path(card_order_id): Path<i32>,
) -> impl IntoResponse {
    let service = CardOrderService::new();

    match service.cancel(card_order_id, claims.user_id()).await {
        Ok(()) => (StatusCode::OK, "Card order cancelled").into_response(),
        Err(e) => card_order_error_response(e),
    }
}

fn card_order_error_response(error: CardOrderServiceError) -> axum::response::Response {
    match error {
        CardOrderServiceError::PermissionDenied => {
            (StatusCode::FORBIDDEN, "Permission denied").into_response()
        }
        CardOrderServiceError::CardOrderNotFound => {
            (StatusCode::NOT_FOUND, "Card order not found").into_response()
        }
        CardOrderServiceError::CardTypeNotFound => {
            (StatusCode::BAD_REQUEST, "Card type not found").into_response()
        }
        CardOrderServiceError::CardTypeUnavailable => {
            (StatusCode::CONFLICT, "Card type is not available").into_response()
        }
        CardOrderServiceError::InvalidQuantity => {
            (StatusCode::BAD_REQUEST, "Quantity must be at least 1").into_response()
        }
        CardOrderServiceError::MissingDesign => {
            (StatusCode::BAD_REQUEST, "A design file is required").into_response()
        }
        CardOrderServiceError::InvalidStatusTransition => {
            (StatusCode::CONFLICT, "Invalid status transition").into_response()
        }
        e => {
            tracing::error!("Card order operation failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Operation failed").into_response()
        }
    }
}
