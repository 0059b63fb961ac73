use crate::api::controllers::dto::newsletter_dto::{SubscribeRequest, SubscriberResponse};
use crate::security::jwt::AccessClaims;
use crate::services::errors::NewsletterServiceError;
use crate::services::newsletter_service::NewsletterService;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

pub async fn subscribe(Json(request): Json<SubscribeRequest>) -> impl IntoResponse {
    let service = NewsletterService::new();

    match service.subscribe(&request.email).await {
        Ok(()) => (StatusCode::CREATED, "Subscribed").into_response(),
        Err(NewsletterServiceError::InvalidEmail) => {
            (StatusCode::BAD_REQUEST, "Invalid email address").into_response()
        }
        Err(e) => {
            tracing::error!("Error subscribing: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to subscribe").into_response()
        }
    }
}

pub async fn unsubscribe(Json(request): Json<SubscribeRequest>) -> impl IntoResponse {
    let service = NewsletterService::new();

    match service.unsubscribe(&request.email).await {
        Ok(()) => (StatusCode::OK, "Unsubscribed").into_response(),
        Err(e) => {
            tracing::error!("Error unsubscribing: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to unsubscribe").into_response()
        }
    }
}

pub async fn get_subscribers(claims: AccessClaims) -> impl IntoResponse {
    let service = NewsletterService::new();

    match service.get_subscribers(claims.role()).await {
        Ok(subscribers) => {
            let response: Vec<SubscriberResponse> = subscribers
                .into_iter()
                .map(SubscriberResponse::from)
                .collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(NewsletterServiceError::PermissionDenied) => {
            (StatusCode::FORBIDDEN, "Permission denied").into_response()
        }
        Err(e) => {
            tracing::error!("Error fetching subscribers: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch subscribers",
            )
                .into_response()
        }
    }
}
