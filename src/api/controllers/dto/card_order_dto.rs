use crate::data::models::card_order::CardOrder;
use crate::data::models::card_type::CardType;
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[derive(Deserialize)]
pub struct UpdateCardOrderStatusRequest {
    pub status: String,
}

#[derive(Deserialize)]
pub struct CardOrderQueryParams {
    pub status: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize)]
pub struct CardOrderResponse {
    pub card_order_id: i32,
    pub user_id: i32,
    pub card_type_id: i32,
    pub card_type_name: Option<String>,
    pub quantity: i32,
    pub design_uri: String,
    pub customer_notes: Option<String>,
    pub total_price: BigDecimal,
    pub status: String,
    pub created_at: Option<String>,
}

impl From<CardOrder> for CardOrderResponse {
    fn from(order: CardOrder) -> Self {
        Self {
            card_order_id: order.card_order_id,
            user_id: order.user_id,
            card_type_id: order.card_type_id,
            card_type_name: None,
            quantity: order.quantity,
            design_uri: order.design_uri,
            customer_notes: order.customer_notes,
            total_price: order.total_price,
            status: order.status,
            created_at: order.created_at.map(|d| d.to_string()),
        }
    }
}

impl From<(CardOrder, CardType)> for CardOrderResponse {
    fn from((order, card_type): (CardOrder, CardType)) -> Self {
        let mut response = CardOrderResponse::from(order);
        response.card_type_name = Some(card_type.name);
        response
    }
}

#[derive(Serialize)]
pub struct CardOrderCreatedResponse {
    pub card_order_id: i32,
    pub total_price: BigDecimal,
}
