use crate::data::models::sale::{NewSale, Sale};
use crate::data::models::user::UserRole;
use crate::data::repos::implementors::sale_repo::SaleRepo;
use crate::services::errors::SaleServiceError;
use bigdecimal::BigDecimal;

pub struct SaleService;

impl SaleService {
    pub fn new() -> Self {
        SaleService
    }

    /// Revenue ledger, admin only.
    pub async fn get_all_sales(&self, role: UserRole) -> Result<Vec<Sale>, SaleServiceError> {
        if !role.is_admin() {
            return Err(SaleServiceError::PermissionDenied);
        }

        let repo = SaleRepo::new();
        Ok(repo
            .get_all()
            .await
            .map_err(|_| SaleServiceError::DatabaseError)?
            .unwrap_or_default())
    }

    /// Sales filtered by channel, e.g. "online" or "in_store".
    pub async fn get_sales_by_source(
        &self,
        role: UserRole,
        source: &str,
    ) -> Result<Vec<Sale>, SaleServiceError> {
        if !role.is_admin() {
            return Err(SaleServiceError::PermissionDenied);
        }

        let repo = SaleRepo::new();
        Ok(repo
            .get_by_source(source)
            .await
            .map_err(|_| SaleServiceError::DatabaseError)?
            .unwrap_or_default())
    }

    /// Manual entry for sales made outside the storefront.
    pub async fn record_sale(
        &self,
        role: UserRole,
        amount: BigDecimal,
        source: &str,
        order_id: Option<i32>,
        customer_id: Option<i32>,
    ) -> Result<(), SaleServiceError> {
        if !role.is_admin() {
            return Err(SaleServiceError::PermissionDenied);
        }

        let sale = NewSale {
            amount,
            order_id,
            source,
            customer_id,
        };

        let repo = SaleRepo::new();
        repo.add(sale)
            .await
            .map_err(|_| SaleServiceError::SaleCreationFailed)
    }
}

impl Default for SaleService {
    fn default() -> Self {
        Self::new()
    }
}
