use crate::data::models::order::Order;
use crate::data::models::schema::*;
use bigdecimal::BigDecimal;
use diesel::prelude::*;

/// Analytics record written on confirmed payments and manual admin entry.
/// Not authoritative for order totals.
#[derive(Queryable, Selectable, Identifiable, Associations, PartialEq, Debug, Clone)]
#[diesel(table_name = sales)]
#[diesel(primary_key(sale_id))]
#[diesel(belongs_to(Order, foreign_key = order_id))]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
pub struct Sale {
    pub sale_id: i32,
    pub amount: BigDecimal,
    pub order_id: Option<i32>,
    pub source: String,
    pub sale_date: Option<chrono::NaiveDateTime>,
    pub customer_id: Option<i32>,
    pub created_at: Option<chrono::NaiveDateTime>,
}

#[derive(Insertable, PartialEq, Debug)]
#[diesel(table_name = sales)]
pub struct NewSale<'a> {
    pub amount: BigDecimal,
    pub order_id: Option<i32>,
    pub source: &'a str,
    pub customer_id: Option<i32>,
}
