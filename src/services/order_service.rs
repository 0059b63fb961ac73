use crate::data::models::order::{NewOrder, Order, UpdateOrder};
use crate::data::models::order_product::OrderProduct;
use crate::data::models::product::Product;
use crate::data::models::user::UserRole;
use crate::data::repos::implementors::cart_repo::CartRepo;
use crate::data::repos::implementors::order_repo::OrderRepo;
use crate::data::repos::implementors::product_repo::ProductRepo;
use crate::data::repos::traits::repository::Repository;
use crate::services::errors::OrderServiceError;
use bigdecimal::BigDecimal;

/// Product order lifecycle. Transitions are restricted to the edges below;
/// Delivered and Cancelled are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Transition table:
    /// Pending -> Processing | Cancelled
    /// Processing -> Shipped | Cancelled
    /// Shipped -> Delivered
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        use OrderStatus::*;
        matches!(
            (self, next),
            (Pending, Processing)
                | (Pending, Cancelled)
                | (Processing, Shipped)
                | (Processing, Cancelled)
                | (Shipped, Delivered)
        )
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(OrderStatus::Pending),
            "processing" => Ok(OrderStatus::Processing),
            "shipped" => Ok(OrderStatus::Shipped),
            "delivered" => Ok(OrderStatus::Delivered),
            "cancelled" => Ok(OrderStatus::Cancelled),
            _ => Err(()),
        }
    }
}

/// Contact and shipping details captured at order time. Stored denormalized
/// on the order row so the audit trail survives account changes.
#[derive(Debug, Clone)]
pub struct CustomerInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub shipping_address: String,
}

/// Σ(unit_price × quantity) over (product_id, quantity, unit_price) lines.
/// The only place order totals are computed; client-sent totals are ignored.
pub fn order_total(lines: &[(i32, i32, BigDecimal)]) -> BigDecimal {
    lines
        .iter()
        .map(|(_, qty, price)| price * BigDecimal::from(*qty))
        .sum()
}

/// Collapses repeated product ids into one line with summed quantities,
/// preserving first-seen order. order_products keys on
/// (order_id, product_id), so repeats must be folded before the snapshot
/// insert.
pub fn merge_requested_lines(requested: Vec<(i32, i32)>) -> Vec<(i32, i32)> {
    let mut merged: Vec<(i32, i32)> = Vec::with_capacity(requested.len());
    for (product_id, quantity) in requested {
        match merged.iter_mut().find(|(id, _)| *id == product_id) {
            Some((_, existing)) => *existing += quantity,
            None => merged.push((product_id, quantity)),
        }
    }
    merged
}

pub struct OrderService;

impl OrderService {
    pub fn new() -> Self {
        OrderService
    }

    /// Converts the user's cart into a Pending order. Prices are snapshotted
    /// from the products table; the insert and the cart clear run in one
    /// transaction, so a failed checkout leaves the cart untouched.
    pub async fn checkout(
        &self,
        user_id: i32,
        customer: &CustomerInfo,
    ) -> Result<(i32, BigDecimal), OrderServiceError> {
        let cart_repo = CartRepo::new();
        let lines = cart_repo
            .get_by_user(user_id)
            .await
            .map_err(|_| OrderServiceError::DatabaseError)?;

        if lines.is_empty() {
            return Err(OrderServiceError::EmptyCart);
        }

        let mut items: Vec<(i32, i32, BigDecimal)> = Vec::with_capacity(lines.len());
        for (item, product) in &lines {
            if !product.is_active() {
                return Err(OrderServiceError::ProductUnavailable);
            }
            items.push((product.product_id, item.quantity, product.price.clone()));
        }

        let total = order_total(&items);

        let new_order = NewOrder {
            user_id: Some(user_id),
            customer_name: &customer.name,
            customer_email: &customer.email,
            customer_phone: &customer.phone,
            shipping_address: &customer.shipping_address,
            total_amount: total.clone(),
            status: OrderStatus::Pending.as_str(),
        };

        let repo = OrderRepo::new();
        let order_id = repo
            .create_with_items_clearing_cart(new_order, items, user_id)
            .await
            .map_err(|_| OrderServiceError::OrderCreationFailed)?;

        tracing::info!(order_id, user_id, %total, "Order created from cart");

        Ok((order_id, total))
    }

    /// Direct order path without a cart. Unit prices come from the products
    /// table at creation time, never from the caller.
    pub async fn create_order(
        &self,
        user_id: Option<i32>,
        customer: &CustomerInfo,
        requested: Vec<(i32, i32)>,
    ) -> Result<(i32, BigDecimal), OrderServiceError> {
        if requested.is_empty() {
            return Err(OrderServiceError::EmptyCart);
        }

        if requested.iter().any(|(_, quantity)| *quantity < 1) {
            return Err(OrderServiceError::InvalidQuantity);
        }

        let requested = merge_requested_lines(requested);

        let product_repo = ProductRepo::new();
        let mut items: Vec<(i32, i32, BigDecimal)> = Vec::with_capacity(requested.len());

        for (product_id, quantity) in requested {
            let product = product_repo
                .get_by_id(product_id)
                .await
                .map_err(|_| OrderServiceError::DatabaseError)?
                .ok_or(OrderServiceError::ProductNotFound)?;

            if !product.is_active() {
                return Err(OrderServiceError::ProductUnavailable);
            }

            items.push((product.product_id, quantity, product.price));
        }

        let total = order_total(&items);

        let new_order = NewOrder {
            user_id,
            customer_name: &customer.name,
            customer_email: &customer.email,
            customer_phone: &customer.phone,
            shipping_address: &customer.shipping_address,
            total_amount: total.clone(),
            status: OrderStatus::Pending.as_str(),
        };

        let repo = OrderRepo::new();
        let order_id = repo
            .create_with_items(new_order, items)
            .await
            .map_err(|_| OrderServiceError::OrderCreationFailed)?;

        tracing::info!(order_id, %total, "Order created");

        Ok((order_id, total))
    }

    /// Full order book, admin only.
    pub async fn get_all_orders(
        &self,
        role: UserRole,
    ) -> Result<Option<Vec<Order>>, OrderServiceError> {
        if !role.is_admin() {
            return Err(OrderServiceError::PermissionDenied);
        }

        let repo = OrderRepo::new();
        repo.get_all()
            .await
            .map_err(|_| OrderServiceError::DatabaseError)
    }

    /// Orders for one user; admins may read anyone's, users only their own.
    pub async fn get_user_orders(
        &self,
        target_user_id: i32,
        requester_id: i32,
        role: UserRole,
    ) -> Result<Option<Vec<Order>>, OrderServiceError> {
        if !role.is_admin() && target_user_id != requester_id {
            return Err(OrderServiceError::PermissionDenied);
        }

        let repo = OrderRepo::new();
        repo.get_by_user_id(target_user_id)
            .await
            .map_err(|_| OrderServiceError::DatabaseError)
    }

    /// One order with its line items and product rows.
    pub async fn get_order_by_id(
        &self,
        order_id: i32,
        requester_id: i32,
        role: UserRole,
    ) -> Result<Option<(Order, Vec<(OrderProduct, Product)>)>, OrderServiceError> {
        let repo = OrderRepo::new();

        let order = match repo
            .get_by_id(order_id)
            .await
            .map_err(|_| OrderServiceError::DatabaseError)?
        {
            Some(order) => order,
            None => return Ok(None),
        };

        if !role.is_admin() && order.user_id != Some(requester_id) {
            return Err(OrderServiceError::PermissionDenied);
        }

        let mut detailed = repo
            .attach_products(vec![order])
            .await
            .map_err(|_| OrderServiceError::DatabaseError)?;

        Ok(detailed.pop())
    }

    pub async fn get_orders_by_status(
        &self,
        status: OrderStatus,
        role: UserRole,
    ) -> Result<Option<Vec<Order>>, OrderServiceError> {
        if !role.is_admin() {
            return Err(OrderServiceError::PermissionDenied);
        }

        let repo = OrderRepo::new();
        repo.get_by_status(status.as_str())
            .await
            .map_err(|_| OrderServiceError::DatabaseError)
    }

    /// Admin status change, constrained by the transition table.
    pub async fn update_status(
        &self,
        order_id: i32,
        new_status: OrderStatus,
        role: UserRole,
    ) -> Result<(), OrderServiceError> {
        if !role.is_admin() {
            return Err(OrderServiceError::PermissionDenied);
        }

        self.transition(order_id, new_status).await
    }

    /// Owner-or-admin cancellation; only a Pending order can be cancelled.
    pub async fn cancel_order(
        &self,
        order_id: i32,
        requester_id: i32,
        role: UserRole,
    ) -> Result<(), OrderServiceError> {
        let repo = OrderRepo::new();

        let order = repo
            .get_by_id(order_id)
            .await
            .map_err(|_| OrderServiceError::DatabaseError)?
            .ok_or(OrderServiceError::OrderNotFound)?;

        if !role.is_admin() && order.user_id != Some(requester_id) {
            return Err(OrderServiceError::PermissionDenied);
        }

        let current: OrderStatus = order
            .status
            .parse()
            .map_err(|_| OrderServiceError::DatabaseError)?;

        if current != OrderStatus::Pending {
            return Err(OrderServiceError::InvalidStatusTransition);
        }

        self.transition(order_id, OrderStatus::Cancelled).await
    }

    /// Payment confirmation hook: advances Pending -> Processing. Called by
    /// the payment service once the gateway reports success.
    pub async fn mark_paid(&self, order_id: i32) -> Result<(), OrderServiceError> {
        self.transition(order_id, OrderStatus::Processing).await
    }

    async fn transition(
        &self,
        order_id: i32,
        new_status: OrderStatus,
    ) -> Result<(), OrderServiceError> {
        let repo = OrderRepo::new();

        let order = repo
            .get_by_id(order_id)
            .await
            .map_err(|_| OrderServiceError::DatabaseError)?
            .ok_or(OrderServiceError::OrderNotFound)?;

        let current: OrderStatus = order
            .status
            .parse()
            .map_err(|_| OrderServiceError::DatabaseError)?;

        if !current.can_transition_to(new_status) {
            return Err(OrderServiceError::InvalidStatusTransition);
        }

        let update = UpdateOrder {
            status: Some(new_status.as_str()),
        };

        repo.update(order_id, update)
            .await
            .map_err(|_| OrderServiceError::OrderUpdateFailed)?;

        tracing::info!(
            order_id,
            from = current.as_str(),
            to = new_status.as_str(),
            "Order status changed"
        );

        Ok(())
    }
}

impl Default for OrderService {
    fn default() -> Self {
        Self::new()
    }
}
