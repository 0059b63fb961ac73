use crate::data::models::product::Product;
use crate::data::models::product_image::ProductImage;
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[derive(Deserialize)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<BigDecimal>,
    pub category_id: Option<i32>,
    pub status: Option<String>,
    pub is_latest: Option<bool>,
}

#[skip_serializing_none]
#[derive(Serialize)]
pub struct ProductResponse {
    pub product_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub category_id: i32,
    pub status: String,
    pub is_latest: bool,
    pub image_uris: Vec<String>,
}

impl From<(Product, Vec<ProductImage>)> for ProductResponse {
    fn from((product, images): (Product, Vec<ProductImage>)) -> Self {
        Self {
            product_id: product.product_id,
            name: product.name,
            description: product.description,
            price: product.price,
            category_id: product.category_id,
            status: product.status,
            is_latest: product.is_latest,
            image_uris: images.into_iter().map(|i| i.image_uri).collect(),
        }
    }
}
