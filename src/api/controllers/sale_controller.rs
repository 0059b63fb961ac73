use crate::api::controllers::dto::sale_dto::{RecordSaleRequest, SaleQueryParams, SaleResponse};
use crate::security::jwt::AccessClaims;
use crate::services::errors::SaleServiceError;
use crate::services::sale_service::SaleService;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

/// Revenue ledger, optionally filtered by sale channel. Admin only.
pub async fn get_sales(
    claims: AccessClaims,
    Query(params): Query<SaleQueryParams>,
) -> impl IntoResponse {
    let service = SaleService::new();

    let result = match params.source.as_deref() {
        Some(source) => service.get_sales_by_source(claims.role(), source).await,
        None => service.get_all_sales(claims.role()).await,
    };

    match result {
        Ok(sales) => {
            let response: Vec<SaleResponse> =
                sales.into_iter().map(SaleResponse::from).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => sale_error_response(e),
    }
}

/// Manual entry for off-storefront sales. Admin only.
pub async fn record_sale(
    claims: AccessClaims,
    Json(request): Json<RecordSaleRequest>,
) -> impl IntoResponse {
    let service = SaleService::new();

    match service
        .record_sale(
            claims.role(),
            request.amount,
            &request.source,
            request.order_id,
            request.customer_id,
        )
        .await
    {
        Ok(()) => (StatusCode::CREATED, "Sale recorded").into_response(),
        Err(e) => sale_error_response(e),
    }
}

fn sale_error_response(error: SaleServiceError) -> axum::response::Response {
    match error {
        SaleServiceError::PermissionDenied => {
            (StatusCode::FORBIDDEN, "Permission denied").into_response()
        }
        e => {
            tracing::error!("Sale operation failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Operation failed").into_response()
        }
    }
}
