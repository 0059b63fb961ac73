use crate::api::controllers::dto::card_type_dto::{
    CardTypeResponse, CreateCardTypeRequest, UpdateCardTypeRequest,
};
use crate::data::models::product::CatalogStatus;
use crate::security::jwt::AccessClaims;
use crate::services::card_type_service::CardTypeService;
use crate::services::errors::CardTypeServiceError;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

/// Public listing of orderable card types.
pub async fn get_card_types() -> impl IntoResponse {
    let service = CardTypeService::new();

    match service.get_card_types().await {
        Ok(card_types) => {
            let response: Vec<CardTypeResponse> =
                card_types.into_iter().map(CardTypeResponse::from).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            tracing::error!("Error fetching card types: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch card types",
            )
                .into_response()
        }
    }
}

pub async fn get_card_type_by_id(Path(card_type_id): Path<i32>) -> impl IntoResponse {
    let service = CardTypeService::new();

    match service.get_card_type_by_id(card_type_id).await {
        Ok(Some(card_type)) => {
            (StatusCode::OK, Json(CardTypeResponse::from(card_type))).into_response()
        }
        Ok(None) => (StatusCode::NOT_FOUND, "Card type not found").into_response(),
        Err(e) => {
            tracing::error!("Error fetching card type: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch card type",
            )
                .into_response()
        }
    }
}

pub async fn get_all_card_types(claims: AccessClaims) -> impl IntoResponse {
    let service = CardTypeService::new();

    match service.get_all_card_types(claims.role()).await {
        Ok(card_types) => {
            let response: Vec<CardTypeResponse> =
                card_types.into_iter().map(CardTypeResponse::from).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => card_type_error_response(e),
    }
}

pub async fn create_card_type(
    claims: AccessClaims,
    Json(request): Json<CreateCardTypeRequest>,
) -> impl IntoResponse {
    let service = CardTypeService::new();

    match service
        .add_card_type(
            claims.role(),
            &request.name,
            request.description.as_deref(),
            request.price,
            request.image_uri.as_deref(),
        )
        .await
    {
        Ok(()) => (StatusCode::CREATED, "Card type created").into_response(),
        Err(e) => card_type_error_response(e),
    }
}

pub async fn update_card_type(
    claims: AccessClaims,
    Path(card_type_id): Path<i32>,
    Json(request): Json<UpdateCardTypeRequest>,
) -> impl IntoResponse {
    let service = CardTypeService::new();

    let status = match request.status.as_deref() {
        Some(s) => match s.parse::<CatalogStatus>() {
            Ok(parsed) => Some(parsed),
            Err(_) => return (StatusCode::BAD_REQUEST, "Unknown status").into_response(),
        },
        None => None,
    };

    match service
        .edit_card_type(
            claims.role(),
            card_type_id,
            request.name.as_deref(),
            request.description.as_deref(),
            request.price,
            request.image_uri.as_deref(),
            status,
        )
        .await
    {
        Ok(()) => (StatusCode::OK, "Card type updated").into_response(),
        Err(e) => card_type_error_response(e),
    }
}

pub async fn retire_card_type(
    claims: AccessClaims,
    Path(card_type_id): Path<i32>,
) -> impl IntoResponse {
    let service = CardTypeService::new();

    match service.retire_card_type(claims.role(), card_type_id).await {
        Ok(()) => (StatusCode::OK, "Card type retired").into_response(),
        Err(e) => card_type_error_response(e),
    }
}

fn card_type_error_response(error: CardTypeServiceError) -> axum::response::Response {
    match error {
        CardTypeServiceError::PermissionDenied => {
            (StatusCode::FORBIDDEN, "Permission denied").into_response()
        }
        CardTypeServiceError::CardTypeNotFound => {
            (StatusCode::NOT_FOUND, "Card type not found").into_response()
        }
        CardTypeServiceError::CardTypeAlreadyExists => {
            (StatusCode::CONFLICT, "Card type already exists").into_response()
        }
        CardTypeServiceError::InvalidPrice => {
            (StatusCode::BAD_REQUEST, "Price must be greater than zero").into_response()
        }
        e => {
            tracing::error!("Card type operation failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Operation failed").into_response()
        }
    }
}
