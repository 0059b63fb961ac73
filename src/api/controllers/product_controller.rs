use crate::api::controllers::dto::product_dto::{ProductResponse, UpdateProductRequest};
use crate::data::models::product::CatalogStatus;
use crate::security::jwt::AccessClaims;
use crate::services::errors::ProductServiceError;
use crate::services::product_service::ProductService;
use crate::utils::uploads;
use axum::extract::{Multipart, Path};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use bigdecimal::BigDecimal;

/// Public catalog listing.
pub async fn get_all_products() -> impl IntoResponse {
    let service = ProductService::new();

    match service.get_all_products().await {
        Ok(products) => {
            let response: Vec<ProductResponse> =
                products.into_iter().map(ProductResponse::from).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            tracing::error!("Error fetching products: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch products").into_response()
        }
    }
}

/// Public new-arrivals listing.
pub async fn get_latest_products() -> impl IntoResponse {
    let service = ProductService::new();

    match service.get_latest_products().await {
        Ok(products) => {
            let response: Vec<ProductResponse> =
                products.into_iter().map(ProductResponse::from).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            tracing::error!("Error fetching latest products: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch products").into_response()
        }
    }
}

pub async fn get_product_by_id(Path(product_id): Path<i32>) -> impl IntoResponse {
    let service = ProductService::new();

    match service.get_product_by_id(product_id).await {
        Ok(Some(product)) => (StatusCode::OK, Json(ProductResponse::from(product))).into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, "Product not found").into_response(),
        Err(e) => {
            tracing::error!("Error fetching product: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch product").into_response()
        }
    }
}

/// Creates a product from a multipart form. Expects text fields `name`,
/// `price` and `category_id`, optional `description` and `is_latest`, and
/// any number of `images` file parts stored in upload order.
pub async fn create_product(claims: AccessClaims, mut multipart: Multipart) -> impl IntoResponse {
    let mut name: Option<String> = None;
    let mut description: Option<String> = None;
    let mut price: Option<BigDecimal> = None;
    let mut category_id: Option<i32> = None;
    let mut is_latest = false;
    let mut images: Vec<(String, axum::body::Bytes)> = Vec::new();

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
            "name" => match field.text().await {
                Ok(text) => name = Some(text),
                Err(_) => return (StatusCode::BAD_REQUEST, "Malformed form data").into_response(),
            },
            "description" => match field.text().await {
                Ok(text) => description = Some(text),
                Err(_) => return (StatusCode::BAD_REQUEST, "Malformed form data").into_response(),
            },
            "price" => match field.text().await {
                Ok(text) => price = text.parse().ok(),
                Err(_) => return (StatusCode::BAD_REQUEST, "Malformed form data").into_response(),
            },
            "category_id" => match field.text().await {
                Ok(text) => category_id = text.parse().ok(),
                Err(_) => return (StatusCode::BAD_REQUEST, "Malformed form data").into_response(),
            },
            "is_latest" => match field.text().await {
                Ok(text) => is_latest = text.parse().unwrap_or(false),
                Err(_) => return (StatusCode::BAD_REQUEST, "Malformed form data").into_response(),
            },
            "images" => {
                let file_name = field.file_name().unwrap_or("image.bin").to_string();
                let bytes = match field.bytes().await {
                    Ok(bytes) => bytes,
                    Err(_) => {
                        return (StatusCode::BAD_REQUEST, "Malformed form data").into_response()
                    }
                };

                if bytes.is_empty() {
                    return (StatusCode::BAD_REQUEST, "Image file is empty").into_response();
                }

                images.push((file_name, bytes));
            }
            _ => {}
        }
    }

    let (name, price, category_id) = match (name, price, category_id) {
        (Some(n), Some(p), Some(c)) => (n, p, c),
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                "name, price and category_id are required",
            )
                .into_response()
        }
    };

    let mut image_uris: Vec<String> = Vec::with_capacity(images.len());
    for (file_name, bytes) in &images {
        match uploads::save_upload(file_name, bytes).await {
            Ok(uri) => image_uris.push(uri),
            Err(e) => {
                tracing::error!("Error storing product image: {}", e);
                discard_uploads(&image_uris).await;
                return (StatusCode::INTERNAL_SERVER_ERROR, "Failed to store images")
                    .into_response();
            }
        }
    }

    let service = ProductService::new();

    match service
        .create_product(
            claims.role(),
            &name,
            description.as_deref(),
            price,
            category_id,
            is_latest,
            image_uris.clone(),
        )
        .await
    {
        Ok(product_id) => (StatusCode::CREATED, Json(product_id)).into_response(),
        Err(e) => {
            discard_uploads(&image_uris).await;
            product_error_response(e)
        }
    }
}

async fn discard_uploads(uris: &[String]) {
    for uri in uris {
        if let Err(e) = uploads::remove_upload(uri).await {
            tracing::warn!("Failed to remove stored upload {}: {}", uri, e);
        }
    }
}

pub async fn update_product(
    claims: AccessClaims,
    Path(product_id): Path<i32>,
    Json(request): Json<UpdateProductRequest>,
) -> impl IntoResponse {
    let service = ProductService::new();

    let status = match request.status.as_deref() {
        Some(s) => match s.parse::<CatalogStatus>() {
            Ok(parsed) => Some(parsed),
            Err(_) => return (StatusCode::BAD_REQUEST, "Unknown status").into_response(),
        },
        None => None,
    };

    match service
        .update_product(
            claims.role(),
            product_id,
            request.name.as_deref(),
            request.description.as_deref(),
            request.price,
            request.category_id,
            status,
            request.is_latest,
        )
        .await
    {
        Ok(()) => (StatusCode::OK, "Product updated").into_response(),
        Err(e) => product_error_response(e),
    }
}

pub async fn delete_product(
    claims: AccessClaims,
    Path(product_id): Path<i32>,
) -> impl IntoResponse {
    let service = ProductService::new();

    match service.delete_product(claims.role(), product_id).await {
        Ok(()) => (StatusCode::OK, "Product deleted").into_response(),
        Err(e) => product_error_response(e),
    }
}

fn product_error_response(error: ProductServiceError) -> axum::response::Response {
    match error {
        ProductServiceError::PermissionDenied => {
            (StatusCode::FORBIDDEN, "Permission denied").into_response()
        }
        ProductServiceError::ProductNotFound => {
            (StatusCode::NOT_FOUND, "Product not found").into_response()
        }
        ProductServiceError::CategoryNotFound => {
            (StatusCode::BAD_REQUEST, "Category not found").into_response()
        }
        ProductServiceError::ProductAlreadyExists => {
            (StatusCode::CONFLICT, "Product already exists").into_response()
        }
        ProductServiceError::ProductReferenced => (
            StatusCode::CONFLICT,
            "Product is referenced by carts or orders",
        )
            .into_response(),
        ProductServiceError::InvalidPrice => {
            (StatusCode::BAD_REQUEST, "Price must be greater than zero").into_response()
        }
        e => {
            tracing::error!("Product operation failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Operation failed").into_response()
        }
    }
}
