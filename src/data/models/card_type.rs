use crate::data::models::product::CatalogStatus;
use crate::data::models::schema::*;
use bigdecimal::BigDecimal;
use diesel::prelude::*;

#[derive(Queryable, Selectable, Identifiable, PartialEq, Debug, Clone)]
#[diesel(table_name = card_types)]
#[diesel(primary_key(card_type_id))]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
pub struct CardType {
    pub card_type_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub image_uri: Option<String>,
    pub status: String,
    pub created_at: Option<chrono::NaiveDateTime>,
    pub updated_at: Option<chrono::NaiveDateTime>,
}

impl CardType {
    pub fn is_active(&self) -> bool {
        self.status
            .parse::<CatalogStatus>()
            .map(|s| s == CatalogStatus::Active)
            .unwrap_or(false)
    }
}

#[derive(Insertable, PartialEq, Debug)]
#[diesel(table_name = card_types)]
pub struct NewCardType<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub price: BigDecimal,
    pub image_uri: Option<&'a str>,
    pub status: &'a str,
}

#[derive(AsChangeset, PartialEq, Debug)]
#[diesel(table_name = card_types)]
pub struct UpdateCardType<'a> {
    pub name: Option<&'a str>,
    pub description: Option<&'a str>,
    pub price: Option<BigDecimal>,
    pub image_uri: Option<&'a str>,
    pub status: Option<&'a str>,
}
