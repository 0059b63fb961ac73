use crate::data::models::cart_item::CartItem;
use crate::data::models::product::Product;
use crate::data::repos::implementors::cart_repo::CartRepo;
use crate::data::repos::implementors::product_repo::ProductRepo;
use crate::data::repos::traits::repository::Repository;
use crate::services::errors::CartServiceError;
use bigdecimal::BigDecimal;

/// Sum of quantity-weighted product prices across cart lines.
pub fn cart_total(lines: &[(CartItem, Product)]) -> BigDecimal {
    lines
        .iter()
        .map(|(item, product)| &product.price * BigDecimal::from(item.quantity))
        .sum()
}

pub struct CartService;

impl CartService {
    pub fn new() -> Self {
        CartService
    }

    /// Returns the user's cart lines joined with product details.
    pub async fn get_cart(
        &self,
        user_id: i32,
    ) -> Result<Vec<(CartItem, Product)>, CartServiceError> {
        let repo = CartRepo::new();
        repo.get_by_user(user_id)
            .await
            .map_err(|_| CartServiceError::DatabaseError)
    }

    /// Find-or-increment add. A second add of the same product raises the
    /// quantity of the existing row rather than inserting a duplicate.
    pub async fn add_item(
        &self,
        user_id: i32,
        product_id: i32,
        quantity: i32,
    ) -> Result<(), CartServiceError> {
        if quantity < 1 {
            return Err(CartServiceError::InvalidQuantity);
        }

        let product_repo = ProductRepo::new();
        let product = product_repo
            .get_by_id(product_id)
            .await
            .map_err(|_| CartServiceError::DatabaseError)?
            .ok_or(CartServiceError::ProductNotFound)?;

        if !product.is_active() {
            return Err(CartServiceError::ProductUnavailable);
        }

        let repo = CartRepo::new();
        repo.add_or_increment(user_id, product_id, quantity)
            .await
            .map_err(|_| CartServiceError::DatabaseError)
    }

    /// Sets the quantity of one cart row. Only the row's owner may touch it.
    pub async fn update_quantity(
        &self,
        requester_id: i32,
        cart_item_id: i32,
        quantity: i32,
    ) -> Result<(), CartServiceError> {
        if quantity < 1 {
            return Err(CartServiceError::InvalidQuantity);
        }

        let repo = CartRepo::new();
        let item = repo
            .get_item(cart_item_id)
            .await
            .map_err(|_| CartServiceError::DatabaseError)?
            .ok_or(CartServiceError::ItemNotFound)?;

        if item.user_id != requester_id {
            return Err(CartServiceError::PermissionDenied);
        }

        repo.set_quantity(cart_item_id, quantity)
            .await
            .map_err(|_| CartServiceError::DatabaseError)
    }

    pub async fn remove_item(
        &self,
        requester_id: i32,
        cart_item_id: i32,
    ) -> Result<(), CartServiceError> {
        let repo = CartRepo::new();
        let item = repo
            .get_item(cart_item_id)
            .await
            .map_err(|_| CartServiceError::DatabaseError)?
            .ok_or(CartServiceError::ItemNotFound)?;

        if item.user_id != requester_id {
            return Err(CartServiceError::PermissionDenied);
        }

        repo.delete_item(cart_item_id)
            .await
            .map_err(|_| CartServiceError::DatabaseError)
    }

    /// Empties the user's cart. Checkout does NOT call this: the order
    /// transaction clears the cart itself so the two cannot diverge.
    pub async fn clear_cart(&self, user_id: i32) -> Result<(), CartServiceError> {
        let repo = CartRepo::new();
        repo.clear_by_user(user_id)
            .await
            .map_err(|_| CartServiceError::DatabaseError)
    }
}

impl Default for CartService {
    fn default() -> Self {
        Self::new()
    }
}
