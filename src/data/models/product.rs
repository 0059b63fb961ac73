use crate::data::models::category::Category;
use crate::data::models::schema::*;
use bigdecimal::BigDecimal;
use diesel::prelude::*;

/// Catalog visibility for products, categories and card types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogStatus {
    Active,
    Inactive,
}

impl CatalogStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogStatus::Active => "Active",
            CatalogStatus::Inactive => "Inactive",
        }
    }
}

impl std::str::FromStr for CatalogStatus {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(CatalogStatus::Active),
            "inactive" => Ok(CatalogStatus::Inactive),
            _ => Err(()),
        }
    }
}

#[derive(Queryable, Selectable, Identifiable, Associations, PartialEq, Debug, Clone)]
#[diesel(table_name = products)]
#[diesel(primary_key(product_id))]
#[diesel(belongs_to(Category, foreign_key = category_id))]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
pub struct Product {
    pub product_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub category_id: i32,
    pub status: String,
    pub is_latest: bool,
    pub created_at: Option<chrono::NaiveDateTime>,
    pub updated_at: Option<chrono::NaiveDateTime>,
}

impl Product {
    pub fn is_active(&self) -> bool {
        self.status
            .parse::<CatalogStatus>()
            .map(|s| s == CatalogStatus::Active)
            .unwrap_or(false)
    }
}

#[derive(Insertable, PartialEq, Debug)]
#[diesel(table_name = products)]
pub struct NewProduct<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub price: BigDecimal,
    pub category_id: i32,
    pub status: &'a str,
    pub is_latest: bool,
}

#[derive(AsChangeset, PartialEq, Debug)]
#[diesel(table_name = products)]
pub struct UpdateProduct<'a> {
    pub name: Option<&'a str>,
    pub description: Option<&'a str>,
    pub price: Option<BigDecimal>,
    pub category_id: Option<i32>,
    pub status: Option<&'a str>,
    pub is_latest: Option<bool>,
}
