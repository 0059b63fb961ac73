use crate::data::models::order::Order;
use crate::data::models::product::Product;
use crate::data::models::schema::*;
use bigdecimal::BigDecimal;
use diesel::prelude::*;

/// Immutable line-item snapshot taken at order time.
#[derive(Queryable, Selectable, Identifiable, Associations, PartialEq, Debug, Clone)]
#[diesel(table_name = order_products)]
#[diesel(primary_key(order_id, product_id))]
#[diesel(belongs_to(Order, foreign_key = order_id))]
#[diesel(belongs_to(Product, foreign_key = product_id))]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
pub struct OrderProduct {
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub unit_price: BigDecimal,
}

impl OrderProduct {
    pub fn line_total(&self) -> BigDecimal {
        &self.unit_price * BigDecimal::from(self.quantity)
    }
}

#[derive(Insertable, PartialEq, Debug)]
#[diesel(table_name = order_products)]
pub struct NewOrderProduct {
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub unit_price: BigDecimal,
}
