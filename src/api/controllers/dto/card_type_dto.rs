use crate::data::models::card_type::CardType;
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[derive(Deserialize)]
pub struct CreateCardTypeRequest {
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub image_uri: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateCardTypeRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<BigDecimal>,
    pub image_uri: Option<String>,
    pub status: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize)]
pub struct CardTypeResponse {
    pub card_type_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub image_uri: Option<String>,
    pub status: String,
}

impl From<CardType> for CardTypeResponse {
    fn from(card_type: CardType) -> Self {
        Self {
            card_type_id: card_type.card_type_id,
            name: card_type.name,
            description: card_type.description,
            price: card_type.price,
            image_uri: card_type.image_uri,
            status: card_type.status,
        }
    }
}
