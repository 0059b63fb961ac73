use crate::data::models::product::{CatalogStatus, NewProduct, Product, UpdateProduct};
use crate::data::models::product_image::ProductImage;
use crate::data::models::user::UserRole;
use crate::data::repos::implementors::category_repo::CategoryRepo;
use crate::data::repos::implementors::product_repo::ProductRepo;
use crate::data::repos::traits::repository::Repository;
use crate::services::errors::ProductServiceError;
use bigdecimal::BigDecimal;

pub struct ProductService;

impl ProductService {
    pub fn new() -> Self {
        ProductService
    }

    /// Public catalog listing with images attached.
    pub async fn get_all_products(
        &self,
    ) -> Result<Vec<(Product, Vec<ProductImage>)>, ProductServiceError> {
        let repo = ProductRepo::new();

        let products = repo
            .get_all()
            .await
            .map_err(|_| ProductServiceError::DatabaseError)?
            .unwrap_or_default();

        repo.attach_images(products)
            .await
            .map_err(|_| ProductServiceError::DatabaseError)
    }

    /// New-arrivals listing: active products flagged latest.
    pub async fn get_latest_products(
        &self,
    ) -> Result<Vec<(Product, Vec<ProductImage>)>, ProductServiceError> {
        let repo = ProductRepo::new();

        let products = repo
            .get_latest()
            .await
            .map_err(|_| ProductServiceError::DatabaseError)?
            .unwrap_or_default();

        repo.attach_images(products)
            .await
            .map_err(|_| ProductServiceError::DatabaseError)
    }

    pub async fn get_product_by_id(
        &self,
        product_id: i32,
    ) -> Result<Option<(Product, Vec<ProductImage>)>, ProductServiceError> {
        let repo = ProductRepo::new();

        let product = match repo
            .get_by_id(product_id)
            .await
            .map_err(|_| ProductServiceError::DatabaseError)?
        {
            Some(p) => p,
            None => return Ok(None),
        };

        let images = repo
            .get_images(product_id)
            .await
            .map_err(|_| ProductServiceError::DatabaseError)?;

        Ok(Some((product, images)))
    }

    /// Admin-only create. Image URIs arrive in display order from the
    /// upload handler.
    #[allow(clippy::too_many_arguments)]
    pub async fn create_product(
        &self,
        role: UserRole,
        name: &str,
        description: Option<&str>,
        price: BigDecimal,
        category_id: i32,
        is_latest: bool,
        image_uris: Vec<String>,
    ) -> Result<i32, ProductServiceError> {
        if !role.is_admin() {
            return Err(ProductServiceError::PermissionDenied);
        }

        if price <= BigDecimal::from(0) {
            return Err(ProductServiceError::InvalidPrice);
        }

        let category_repo = CategoryRepo::new();
        category_repo
            .get_by_id(category_id)
            .await
            .map_err(|_| ProductServiceError::DatabaseError)?
            .ok_or(ProductServiceError::CategoryNotFound)?;

        let repo = ProductRepo::new();

        if repo
            .get_by_name(name)
            .await
            .map_err(|_| ProductServiceError::DatabaseError)?
            .is_some()
        {
            return Err(ProductServiceError::ProductAlreadyExists);
        }

        let new_product = NewProduct {
            name,
            description,
            price,
            category_id,
            status: CatalogStatus::Active.as_str(),
            is_latest,
        };

        repo.add_with_images(new_product, image_uris)
            .await
            .map_err(|_| ProductServiceError::ProductCreationFailed)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update_product(
        &self,
        role: UserRole,
        product_id: i32,
        name: Option<&str>,
        description: Option<&str>,
        price: Option<BigDecimal>,
        category_id: Option<i32>,
        status: Option<CatalogStatus>,
        is_latest: Option<bool>,
    ) -> Result<(), ProductServiceError> {
        if !role.is_admin() {
            return Err(ProductServiceError::PermissionDenied);
        }

        if let Some(ref p) = price {
            if *p <= BigDecimal::from(0) {
                return Err(ProductServiceError::InvalidPrice);
            }
        }

        let repo = ProductRepo::new();

        repo.get_by_id(product_id)
            .await
            .map_err(|_| ProductServiceError::DatabaseError)?
            .ok_or(ProductServiceError::ProductNotFound)?;

        if let Some(cid) = category_id {
            let category_repo = CategoryRepo::new();
            category_repo
                .get_by_id(cid)
                .await
                .map_err(|_| ProductServiceError::DatabaseError)?
                .ok_or(ProductServiceError::CategoryNotFound)?;
        }

        let update = UpdateProduct {
            name,
            description,
            price,
            category_id,
            status: status.map(|s| s.as_str()),
            is_latest,
        };

        repo.update(product_id, update)
            .await
            .map_err(|_| ProductServiceError::ProductUpdateFailed)
    }

    /// Hard delete is refused while carts or orders still reference the
    /// product; deactivate instead.
    pub async fn delete_product(
        &self,
        role: UserRole,
        product_id: i32,
    ) -> Result<(), ProductServiceError> {
        if !role.is_admin() {
            return Err(ProductServiceError::PermissionDenied);
        }

        let repo = ProductRepo::new();

        repo.get_by_id(product_id)
            .await
            .map_err(|_| ProductServiceError::DatabaseError)?
            .ok_or(ProductServiceError::ProductNotFound)?;

        let references = repo
            .reference_count(product_id)
            .await
            .map_err(|_| ProductServiceError::DatabaseError)?;

        if references > 0 {
            return Err(ProductServiceError::ProductReferenced);
        }

        repo.delete(product_id)
            .await
            .map_err(|_| ProductServiceError::ProductDeletionFailed)
    }
}

impl Default for ProductService {
    fn default() -> Self {
        Self::new()
    }
}
