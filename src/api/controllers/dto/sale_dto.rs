use crate::data::models::sale::Sale;
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[derive(Deserialize)]
pub struct RecordSaleRequest {
    pub amount: BigDecimal,
    pub source: String,
    pub order_id: Option<i32>,
    pub customer_id: Option<i32>,
}

#[derive(Deserialize)]
pub struct SaleQueryParams {
    pub source: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize)]
pub struct SaleResponse {
    pub sale_id: i32,
    pub amount: BigDecimal,
    pub order_id: Option<i32>,
    pub source: String,
    pub customer_id: Option<i32>,
    pub sale_date: Option<String>,
}

impl From<Sale> for SaleResponse {
    fn from(sale: Sale) -> Self {
        Self {
            sale_id: sale.sale_id,
            amount: sale.amount,
            order_id: sale.order_id,
            source: sale.source,
            customer_id: sale.customer_id,
            sale_date: sale.sale_date.map(|d| d.to_string()),
        }
    }
}
