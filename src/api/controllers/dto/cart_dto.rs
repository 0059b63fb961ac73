use crate::data::models::cart_item::CartItem;
use crate::data::models::product::Product;
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct AddCartItemRequest {
    pub product_id: i32,
    pub quantity: i32,
}

#[derive(Deserialize)]
pub struct UpdateCartItemRequest {
    pub quantity: i32,
}

#[derive(Serialize)]
pub struct CartLineResponse {
    pub cart_item_id: i32,
    pub product_id: i32,
    pub product_name: String,
    pub unit_price: BigDecimal,
    pub quantity: i32,
    pub line_total: BigDecimal,
}

impl From<(CartItem, Product)> for CartLineResponse {
    fn from((item, product): (CartItem, Product)) -> Self {
        let line_total = &product.price * BigDecimal::from(item.quantity);
        Self {
            cart_item_id: item.cart_item_id,
            product_id: product.product_id,
            product_name: product.name,
            unit_price: product.price,
            quantity: item.quantity,
            line_total,
        }
    }
}

#[derive(Serialize)]
pub struct CartResponse {
    pub items: Vec<CartLineResponse>,
    pub total: BigDecimal,
}
