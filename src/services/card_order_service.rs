use crate::data::models::card_order::{CardOrder, NewCardOrder, UpdateCardOrder};
use crate::data::models::card_type::CardType;
use crate::data::models::user::UserRole;
use crate::data::repos::implementors::card_order_repo::CardOrderRepo;
use crate::data::repos::implementors::card_type_repo::CardTypeRepo;
use crate::data::repos::traits::repository::Repository;
use crate::services::errors::CardOrderServiceError;
use bigdecimal::BigDecimal;

/// Custom card order lifecycle. Completed and Cancelled are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardOrderStatus {
    Pending,
    Processing,
    Completed,
    Cancelled,
}

impl CardOrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardOrderStatus::Pending => "Pending",
            CardOrderStatus::Processing => "Processing",
            CardOrderStatus::Completed => "Completed",
            CardOrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Transition table:
    /// Pending -> Processing | Cancelled
    /// Processing -> Completed | Cancelled
    pub fn can_transition_to(&self, next: CardOrderStatus) -> bool {
        use CardOrderStatus::*;
        matches!(
            (self, next),
            (Pending, Processing)
                | (Pending, Cancelled)
                | (Processing, Completed)
                | (Processing, Cancelled)
        )
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, CardOrderStatus::Completed | CardOrderStatus::Cancelled)
    }
}

impl std::str::FromStr for CardOrderStatus {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(CardOrderStatus::Pending),
            "processing" => Ok(CardOrderStatus::Processing),
            "completed" => Ok(CardOrderStatus::Completed),
            "cancelled" => Ok(CardOrderStatus::Cancelled),
            _ => Err(()),
        }
    }
}

/// card_type.price × quantity, computed server-side.
pub fn card_order_total(unit_price: &BigDecimal, quantity: i32) -> BigDecimal {
    unit_price * BigDecimal::from(quantity)
}

pub struct CardOrderService;

impl CardOrderService {
    pub fn new() -> Self {
        CardOrderService
    }

    /// Persists a Pending card order. The total is derived from the card
    /// type's current price; the uploaded design must already be stored and
    /// its URI passed in.
    pub async fn create_card_order(
        &self,
        user_id: i32,
        card_type_id: i32,
        quantity: i32,
        design_uri: &str,
        customer_notes: Option<&str>,
    ) -> Result<(i32, BigDecimal), CardOrderServiceError> {
        if quantity < 1 {
            return Err(CardOrderServiceError::InvalidQuantity);
        }

        if design_uri.trim().is_empty() {
            return Err(CardOrderServiceError::MissingDesign);
        }

        let card_type_repo = CardTypeRepo::new();
        let card_type = card_type_repo
            .get_by_id(card_type_id)
            .await
            .map_err(|_| CardOrderServiceError::DatabaseError)?
            .ok_or(CardOrderServiceError::CardTypeNotFound)?;

        if !card_type.is_active() {
            return Err(CardOrderServiceError::CardTypeUnavailable);
        }

        let total = card_order_total(&card_type.price, quantity);

        let new_order = NewCardOrder {
            user_id,
            card_type_id,
            quantity,
            design_uri,
            customer_notes,
            total_price: total.clone(),
            status: CardOrderStatus::Pending.as_str(),
        };

        let repo = CardOrderRepo::new();
        let card_order_id = repo
            .add(new_order)
            .await
            .map_err(|_| CardOrderServiceError::CardOrderCreationFailed)?;

        tracing::info!(card_order_id, user_id, %total, "Card order created");

        Ok((card_order_id, total))
    }

    /// Owner self-service cancel, valid only while the order is Pending.
    pub async fn cancel(
        &self,
        card_order_id: i32,
        requester_id: i32,
    ) -> Result<(), CardOrderServiceError> {
        let repo = CardOrderRepo::new();

        let order = repo
            .get_by_id(card_order_id)
            .await
            .map_err(|_| CardOrderServiceError::DatabaseError)?
            .ok_or(CardOrderServiceError::CardOrderNotFound)?;

        if order.user_id != requester_id {
            return Err(CardOrderServiceError::PermissionDenied);
        }

        let current: CardOrderStatus = order
            .status
            .parse()
            .map_err(|_| CardOrderServiceError::DatabaseError)?;

        if current != CardOrderStatus::Pending {
            return Err(CardOrderServiceError::InvalidStatusTransition);
        }

        self.transition(card_order_id, CardOrderStatus::Cancelled)
            .await
    }

    /// Admin status change, constrained by the transition table.
    pub async fn update_status(
        &self,
        card_order_id: i32,
        new_status: CardOrderStatus,
        role: UserRole,
    ) -> Result<(), CardOrderServiceError> {
        if !role.is_admin() {
            return Err(CardOrderServiceError::PermissionDenied);
        }

        self.transition(card_order_id, new_status).await
    }

    pub async fn get_user_orders(
        &self,
        user_id: i32,
    ) -> Result<Option<Vec<CardOrder>>, CardOrderServiceError> {
        let repo = CardOrderRepo::new();
        repo.get_by_user_id(user_id)
            .await
            .map_err(|_| CardOrderServiceError::DatabaseError)
    }

    pub async fn get_all_orders(
        &self,
        role: UserRole,
    ) -> Result<Option<Vec<CardOrder>>, CardOrderServiceError> {
        if !role.is_admin() {
            return Err(CardOrderServiceError::PermissionDenied);
        }

        let repo = CardOrderRepo::new();
        repo.get_all()
            .await
            .map_err(|_| CardOrderServiceError::DatabaseError)
    }

    pub async fn get_orders_by_status(
        &self,
        status: CardOrderStatus,
        role: UserRole,
    ) -> Result<Option<Vec<CardOrder>>, CardOrderServiceError> {
        if !role.is_admin() {
            return Err(CardOrderServiceError::PermissionDenied);
        }

        let repo = CardOrderRepo::new();
        repo.get_by_status(status.as_str())
            .await
            .map_err(|_| CardOrderServiceError::DatabaseError)
    }

    /// Card orders joined with their card types for display.
    pub async fn with_card_types(
        &self,
        orders: Vec<CardOrder>,
    ) -> Result<Vec<(CardOrder, CardType)>, CardOrderServiceError> {
        let repo = CardOrderRepo::new();
        repo.attach_card_types(orders)
            .await
            .map_err(|_| CardOrderServiceError::DatabaseError)
    }

    async fn transition(
        &self,
        card_order_id: i32,
        new_status: CardOrderStatus,
    ) -> Result<(), CardOrderServiceError> {
        let repo = CardOrderRepo::new();

        let order = repo
            .get_by_id(card_order_id)
            .await
            .map_err(|_| CardOrderServiceError::DatabaseError)?
            .ok_or(CardOrderServiceError::CardOrderNotFound)?;

        let current: CardOrderStatus = order
            .status
            .parse()
            .map_err(|_| CardOrderServiceError::DatabaseError)?;

        if !current.can_transition_to(new_status) {
            return Err(CardOrderServiceError::InvalidStatusTransition);
        }

        let update = UpdateCardOrder {
            status: Some(new_status.as_str()),
        };

        repo.update(card_order_id, update)
            .await
            .map_err(|_| CardOrderServiceError::CardOrderUpdateFailed)?;

        tracing::info!(
            card_order_id,
            from = current.as_str(),
            to = new_status.as_str(),
            "Card order status changed"
        );

        Ok(())
    }
}

impl Default for CardOrderService {
    fn default() -> Self {
        Self::new()
    }
}
