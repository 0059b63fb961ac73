use crate::data::models::category::{Category, NewCategory, UpdateCategory};
use crate::data::models::product::CatalogStatus;
use crate::data::models::user::UserRole;
use crate::data::repos::implementors::category_repo::CategoryRepo;
use crate::data::repos::traits::repository::Repository;
use crate::services::errors::CategoryServiceError;

pub struct CategoryService;

impl CategoryService {
    pub fn new() -> Self {
        CategoryService
    }

    /// Storefront listing: active categories only.
    pub async fn get_categories(&self) -> Result<Vec<Category>, CategoryServiceError> {
        let repo = CategoryRepo::new();
        Ok(repo
            .get_active()
            .await
            .map_err(|_| CategoryServiceError::DatabaseError)?
            .unwrap_or_default())
    }

    /// Back-office listing including inactive categories.
    pub async fn get_all_categories(
        &self,
        role: UserRole,
    ) -> Result<Vec<Category>, CategoryServiceError> {
        if !role.is_admin() {
            return Err(CategoryServiceError::PermissionDenied);
        }

        let repo = CategoryRepo::new();
        Ok(repo
            .get_all()
            .await
            .map_err(|_| CategoryServiceError::DatabaseError)?
            .unwrap_or_default())
    }

    pub async fn add_category(
        &self,
        role: UserRole,
        name: &str,
    ) -> Result<(), CategoryServiceError> {
        if !role.is_admin() {
            return Err(CategoryServiceError::PermissionDenied);
        }

        let repo = CategoryRepo::new();

        if repo
            .get_by_name(name)
            .await
            .map_err(|_| CategoryServiceError::DatabaseError)?
            .is_some()
        {
            return Err(CategoryServiceError::CategoryAlreadyExists);
        }

        let new_category = NewCategory {
            name,
            status: CatalogStatus::Active.as_str(),
        };

        repo.add(new_category)
            .await
            .map_err(|_| CategoryServiceError::CategoryCreationFailed)
    }

    pub async fn edit_category(
        &self,
        role: UserRole,
        category_id: i32,
        name: Option<&str>,
        status: Option<CatalogStatus>,
    ) -> Result<(), CategoryServiceError> {
        if !role.is_admin() {
            return Err(CategoryServiceError::PermissionDenied);
        }

        let repo = CategoryRepo::new();

        repo.get_by_id(category_id)
            .await
            .map_err(|_| CategoryServiceError::DatabaseError)?
            .ok_or(CategoryServiceError::CategoryNotFound)?;

        let update = UpdateCategory {
            name,
            status: status.map(|s| s.as_str()),
        };

        repo.update(category_id, update)
            .await
            .map_err(|_| CategoryServiceError::CategoryUpdateFailed)
    }

    pub async fn delete_category(
        &self,
        role: UserRole,
        category_id: i32,
    ) -> Result<(), CategoryServiceError> {
        if !role.is_admin() {
            return Err(CategoryServiceError::PermissionDenied);
        }

        let repo = CategoryRepo::new();

        repo.get_by_id(category_id)
            .await
            .map_err(|_| CategoryServiceError::DatabaseError)?
            .ok_or(CategoryServiceError::CategoryNotFound)?;

        // FK from products restricts deletion of a category still in use.
        repo.delete(category_id)
            .await
            .map_err(|_| CategoryServiceError::CategoryDeletionFailed)
    }
}

impl Default for CategoryService {
    fn default() -> Self {
        Self::new()
    }
}
