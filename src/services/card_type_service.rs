use crate::data::models::card_type::{CardType, NewCardType, UpdateCardType};
use crate::data::models::product::CatalogStatus;
use crate::data::models::user::UserRole;
use crate::data::repos::implementors::card_type_repo::CardTypeRepo;
use crate::data::repos::traits::repository::Repository;
use crate::services::errors::CardTypeServiceError;
use bigdecimal::BigDecimal;

pub struct CardTypeService;

impl CardTypeService {
    pub fn new() -> Self {
        CardTypeService
    }

    /// Storefront listing: active card types only.
    pub async fn get_card_types(&self) -> Result<Vec<CardType>, CardTypeServiceError> {
        let repo = CardTypeRepo::new();
        Ok(repo
            .get_active()
            .await
            .map_err(|_| CardTypeServiceError::DatabaseError)?
            .unwrap_or_default())
    }

    pub async fn get_card_type_by_id(
        &self,
        card_type_id: i32,
    ) -> Result<Option<CardType>, CardTypeServiceError> {
        let repo = CardTypeRepo::new();
        repo.get_by_id(card_type_id)
            .await
            .map_err(|_| CardTypeServiceError::DatabaseError)
    }

    /// Back-office listing including inactive card types.
    pub async fn get_all_card_types(
        &self,
        role: UserRole,
    ) -> Result<Vec<CardType>, CardTypeServiceError> {
        if !role.is_admin() {
            return Err(CardTypeServiceError::PermissionDenied);
        }

        let repo = CardTypeRepo::new();
        Ok(repo
            .get_all()
            .await
            .map_err(|_| CardTypeServiceError::DatabaseError)?
            .unwrap_or_default())
    }

    pub async fn add_card_type(
        &self,
        role: UserRole,
        name: &str,
        description: Option<&str>,
        price: BigDecimal,
        image_uri: Option<&str>,
    ) -> Result<(), CardTypeServiceError> {
        if !role.is_admin() {
            return Err(CardTypeServiceError::PermissionDenied);
        }

        if price <= BigDecimal::from(0) {
            return Err(CardTypeServiceError::InvalidPrice);
        }

        let repo = CardTypeRepo::new();

        if repo
            .get_by_name(name)
            .await
            .map_err(|_| CardTypeServiceError::DatabaseError)?
            .is_some()
        {
            return Err(CardTypeServiceError::CardTypeAlreadyExists);
        }

        let new_card_type = NewCardType {
            name,
            description,
            price,
            image_uri,
            status: CatalogStatus::Active.as_str(),
        };

        repo.add(new_card_type)
            .await
            .map_err(|_| CardTypeServiceError::CardTypeCreationFailed)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn edit_card_type(
        &self,
        role: UserRole,
        card_type_id: i32,
        name: Option<&str>,
        description: Option<&str>,
        price: Option<BigDecimal>,
        image_uri: Option<&str>,
        status: Option<CatalogStatus>,
    ) -> Result<(), CardTypeServiceError> {
        if !role.is_admin() {
            return Err(CardTypeServiceError::PermissionDenied);
        }

        if let Some(ref p) = price {
            if *p <= BigDecimal::from(0) {
                return Err(CardTypeServiceError::InvalidPrice);
            }
        }

        let repo = CardTypeRepo::new();

        repo.get_by_id(card_type_id)
            .await
            .map_err(|_| CardTypeServiceError::DatabaseError)?
            .ok_or(CardTypeServiceError::CardTypeNotFound)?;

        let update = UpdateCardType {
            name,
            description,
            price,
            image_uri,
            status: status.map(|s| s.as_str()),
        };

        repo.update(card_type_id, update)
            .await
            .map_err(|_| CardTypeServiceError::CardTypeUpdateFailed)
    }

    /// Card types referenced by card orders are never hard-deleted, only
    /// deactivated.
    pub async fn retire_card_type(
        &self,
        role: UserRole,
        card_type_id: i32,
    ) -> Result<(), CardTypeServiceError> {
        self.edit_card_type(
            role,
            card_type_id,
            None,
            None,
            None,
            None,
            Some(CatalogStatus::Inactive),
        )
        .await
    }
}

impl Default for CardTypeService {
    fn default() -> Self {
        Self::new()
    }
}
