use crate::data::models::card_type::CardType;
use crate::data::models::schema::*;
use crate::data::models::user::User;
use bigdecimal::BigDecimal;
use diesel::prelude::*;

#[derive(Queryable, Selectable, Identifiable, Associations, PartialEq, Debug, Clone)]
#[diesel(table_name = card_orders)]
#[diesel(primary_key(card_order_id))]
#[diesel(belongs_to(User, foreign_key = user_id))]
#[diesel(belongs_to(CardType, foreign_key = card_type_id))]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
pub struct CardOrder {
    pub card_order_id: i32,
    pub user_id: i32,
    pub card_type_id: i32,
    pub quantity: i32,
    pub design_uri: String,
    pub customer_notes: Option<String>,
    pub total_price: BigDecimal,
    pub status: String,
    pub created_at: Option<chrono::NaiveDateTime>,
    pub updated_at: Option<chrono::NaiveDateTime>,
}

#[derive(Insertable, PartialEq, Debug)]
#[diesel(table_name = card_orders)]
pub struct NewCardOrder<'a> {
    pub user_id: i32,
    pub card_type_id: i32,
    pub quantity: i32,
    pub design_uri: &'a str,
    pub customer_notes: Option<&'a str>,
    pub total_price: BigDecimal,
    pub status: &'a str,
}

#[derive(AsChangeset, PartialEq, Debug)]
#[diesel(table_name = card_orders)]
pub struct UpdateCardOrder<'a> {
    pub status: Option<&'a str>,
}
