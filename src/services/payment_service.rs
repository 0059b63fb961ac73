use crate::data::repos::implementors::order_repo::OrderRepo;
use crate::data::repos::implementors::sale_repo::SaleRepo;
use crate::data::models::sale::NewSale;
use crate::services::errors::PaymentServiceError;
use crate::services::order_service::{OrderService, OrderStatus};
use crate::services::payment_gateway::{IntentStatus, PaymentGateway};
use bigdecimal::{BigDecimal, ToPrimitive};

pub const SALE_SOURCE_ONLINE: &str = "online";

/// Per-checkout attempt lifecycle. A failed confirmation is retryable:
/// the client may request a fresh intent for the same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutState {
    Created,
    IntentRequested,
    Confirming,
    Succeeded,
    Failed,
}

impl CheckoutState {
    pub fn can_transition_to(&self, next: CheckoutState) -> bool {
        use CheckoutState::*;
        matches!(
            (self, next),
            (Created, IntentRequested)
                | (IntentRequested, Confirming)
                | (Confirming, Succeeded)
                | (Confirming, Failed)
                | (Failed, IntentRequested)
        )
    }
}

/// Converts a decimal amount into provider minor units (cents). Returns
/// None when the amount has sub-cent precision or exceeds i64.
pub fn to_minor_units(amount: &BigDecimal) -> Option<i64> {
    let scaled = amount * BigDecimal::from(100);
    if scaled.with_scale(0) != scaled.with_scale(2) {
        return None;
    }
    scaled.with_scale(0).to_i64()
}

/// What the client needs to confirm the charge with the provider.
#[derive(Debug, Clone)]
pub struct IntentHandle {
    pub intent_id: String,
    pub client_secret: String,
}

pub struct PaymentService<G: PaymentGateway> {
    gateway: G,
}

impl<G: PaymentGateway> PaymentService<G> {
    pub fn new(gateway: G) -> Self {
        PaymentService { gateway }
    }

    /// Requests a payment intent for a Pending order. The charge amount is
    /// read from the persisted order total; client-sent amounts are never
    /// accepted.
    pub async fn create_intent(&self, order_id: i32) -> Result<IntentHandle, PaymentServiceError> {
        let repo = OrderRepo::new();

        let order = repo
            .get_by_id(order_id)
            .await
            .map_err(|_| PaymentServiceError::DatabaseError)?
            .ok_or(PaymentServiceError::OrderNotFound)?;

        let status: OrderStatus = order
            .status
            .parse()
            .map_err(|_| PaymentServiceError::DatabaseError)?;

        if status != OrderStatus::Pending {
            return Err(PaymentServiceError::OrderNotPending);
        }

        let amount_minor =
            to_minor_units(&order.total_amount).ok_or(PaymentServiceError::AmountOverflow)?;

        let intent = self
            .gateway
            .create_intent(amount_minor, "usd", &order_id.to_string())
            .await
            .map_err(|_| PaymentServiceError::GatewayUnavailable)?;

        tracing::info!(order_id, intent_id = %intent.intent_id, "Payment intent created");

        Ok(IntentHandle {
            intent_id: intent.intent_id,
            client_secret: intent.client_secret,
        })
    }

    /// Verifies the intent's outcome with the gateway. On success the order
    /// advances Pending -> Processing and an online sale is recorded; on
    /// failure the order stays Pending so payment can be retried.
    pub async fn confirm_payment(
        &self,
        order_id: i32,
        intent_id: &str,
    ) -> Result<(), PaymentServiceError> {
        let repo = OrderRepo::new();

        let order = repo
            .get_by_id(order_id)
            .await
            .map_err(|_| PaymentServiceError::DatabaseError)?
            .ok_or(PaymentServiceError::OrderNotFound)?;

        let status: OrderStatus = order
            .status
            .parse()
            .map_err(|_| PaymentServiceError::DatabaseError)?;

        if status != OrderStatus::Pending {
            return Err(PaymentServiceError::OrderNotPending);
        }

        let intent = self
            .gateway
            .retrieve_intent(intent_id)
            .await
            .map_err(|_| PaymentServiceError::GatewayUnavailable)?;

        match intent.status {
            IntentStatus::Succeeded => {
                // Status first: a retried confirmation finds the order no
                // longer Pending and cannot record a second sale.
                OrderService::new()
                    .mark_paid(order_id)
                    .await
                    .map_err(|_| PaymentServiceError::DatabaseError)?;

                let sale_repo = SaleRepo::new();
                let sale = NewSale {
                    amount: order.total_amount.clone(),
                    order_id: Some(order.order_id),
                    source: SALE_SOURCE_ONLINE,
                    customer_id: order.user_id,
                };

                sale_repo
                    .add(sale)
                    .await
                    .map_err(|_| PaymentServiceError::DatabaseError)?;

                tracing::info!(order_id, intent_id, "Payment confirmed");

                Ok(())
            }
            IntentStatus::Failed => {
                tracing::warn!(order_id, intent_id, "Payment failed, order stays pending");
                Err(PaymentServiceError::PaymentFailed)
            }
            IntentStatus::Processing | IntentStatus::RequiresAction => {
                Err(PaymentServiceError::PaymentIncomplete)
            }
        }
    }
}
