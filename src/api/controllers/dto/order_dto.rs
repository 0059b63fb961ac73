use crate::data::models::order::Order;
use crate::data::models::order_product::OrderProduct;
use crate::data::models::product::Product;
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[derive(Deserialize)]
pub struct CheckoutRequest {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub shipping_address: String,
}

#[derive(Deserialize)]
pub struct OrderItemRequest {
    pub product_id: i32,
    pub quantity: i32,
}

#[derive(Deserialize)]
pub struct CreateOrderRequest {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub shipping_address: String,
    pub products: Vec<OrderItemRequest>,
}

#[derive(Deserialize)]
pub struct UpdateOrderStatusRequest {
    pub status: String,
}

#[derive(Deserialize)]
pub struct OrderQueryParams {
    pub status: Option<String>,
}

#[derive(Serialize)]
pub struct OrderLineResponse {
    pub product_id: i32,
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: BigDecimal,
    pub line_total: BigDecimal,
}

impl From<(OrderProduct, Product)> for OrderLineResponse {
    fn from((line, product): (OrderProduct, Product)) -> Self {
        let line_total = line.line_total();
        Self {
            product_id: line.product_id,
            product_name: product.name,
            quantity: line.quantity,
            unit_price: line.unit_price,
            line_total,
        }
    }
}

#[skip_serializing_none]
#[derive(Serialize)]
pub struct OrderResponse {
    pub order_id: i32,
    pub user_id: Option<i32>,
    pub customer_name: String,
    pub customer_email: String,
    pub total_amount: BigDecimal,
    pub status: String,
    pub created_at: Option<String>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            order_id: order.order_id,
            user_id: order.user_id,
            customer_name: order.customer_name,
            customer_email: order.customer_email,
            total_amount: order.total_amount,
            status: order.status,
            created_at: order.created_at.map(|d| d.to_string()),
        }
    }
}

#[skip_serializing_none]
#[derive(Serialize)]
pub struct OrderDetailResponse {
    pub order_id: i32,
    pub user_id: Option<i32>,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub shipping_address: String,
    pub total_amount: BigDecimal,
    pub status: String,
    pub items: Vec<OrderLineResponse>,
    pub created_at: Option<String>,
}

impl From<(Order, Vec<(OrderProduct, Product)>)> for OrderDetailResponse {
    fn from((order, lines): (Order, Vec<(OrderProduct, Product)>)) -> Self {
        Self {
            order_id: order.order_id,
            user_id: order.user_id,
            customer_name: order.customer_name,
            customer_email: order.customer_email,
            customer_phone: order.customer_phone,
            shipping_address: order.shipping_address,
            total_amount: order.total_amount,
            status: order.status,
            items: lines.into_iter().map(OrderLineResponse::from).collect(),
            created_at: order.created_at.map(|d| d.to_string()),
        }
    }
}

#[derive(Serialize)]
pub struct OrderCreatedResponse {
    pub order_id: i32,
    pub total_amount: BigDecimal,
}
